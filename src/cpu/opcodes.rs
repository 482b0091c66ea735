//! The 256-entry opcode tables: mnemonic, addressing mode, base cycle count.
//!
//! Transcribed from the reference 6502 opcode matrix that this core's
//! original C implementation (`mos6502_configureTables`) hard-codes, which
//! itself matches the well-known 6502/2A03 instruction set including the
//! illegal opcodes relied on by real NES software. Populated once, immutable
//! thereafter — there is nothing to "configure" at runtime in this port, so
//! the table is a `const`.

/// One of the 80 distinct mnemonics (56 documented + commonly-used illegals
/// + the catch-all illegal NOP/JAM buckets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC, CLD, CLI, CLV, CMP, CPX,
    CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP, JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA,
    PLP, ROL, ROR, RTI, RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
    // Illegal / undocumented
    ALR, ANC, ANE, ARR, DCP, ISC, LAS, LAX, LXA, RLA, RRA, SAX, SBX, SHA, SHX, SHY, SLO, SRE, TAS,
    USBC, ILL_NOP, ILL_JAM,
}

/// One of the 13 addressing modes named in the component design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Accumulator,
    Implied,
    Immediate,
    Absolute,
    ZeroPage,
    Relative,
    Indirect,
    AbsoluteX,
    AbsoluteY,
    ZeroPageX,
    ZeroPageY,
    IndexedIndirect, // (ZP,X)
    IndirectIndexed, // (ZP),Y
}

impl AddressingMode {
    /// Total instruction byte count including the opcode byte.
    pub fn byte_len(self) -> u8 {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implied => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::Relative
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 2,
            AddressingMode::Absolute
            | AddressingMode::Indirect
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY => 3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub cycles: u8,
}

const fn e(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> OpcodeEntry {
    OpcodeEntry { mnemonic, mode, cycles }
}

use AddressingMode::*;
use Mnemonic::*;

/// The 256-entry opcode table, indexed by opcode byte.
pub static OPCODE_TABLE: [OpcodeEntry; 256] = [
    /*00*/ e(BRK, Implied, 7),
    /*01*/ e(ORA, IndexedIndirect, 6),
    /*02*/ e(ILL_JAM, Implied, 0),
    /*03*/ e(SLO, IndexedIndirect, 8),
    /*04*/ e(ILL_NOP, ZeroPage, 3),
    /*05*/ e(ORA, ZeroPage, 3),
    /*06*/ e(ASL, ZeroPage, 5),
    /*07*/ e(SLO, ZeroPage, 5),
    /*08*/ e(PHP, Implied, 3),
    /*09*/ e(ORA, Immediate, 2),
    /*0A*/ e(ASL, Accumulator, 2),
    /*0B*/ e(ANC, Immediate, 2),
    /*0C*/ e(ILL_NOP, Absolute, 4),
    /*0D*/ e(ORA, Absolute, 4),
    /*0E*/ e(ASL, Absolute, 6),
    /*0F*/ e(SLO, Absolute, 6),
    /*10*/ e(BPL, Relative, 2),
    /*11*/ e(ORA, IndirectIndexed, 5),
    /*12*/ e(ILL_JAM, Implied, 0),
    /*13*/ e(SLO, IndirectIndexed, 8),
    /*14*/ e(ILL_NOP, ZeroPageX, 4),
    /*15*/ e(ORA, ZeroPageX, 4),
    /*16*/ e(ASL, ZeroPageX, 6),
    /*17*/ e(SLO, ZeroPageX, 6),
    /*18*/ e(CLC, Implied, 2),
    /*19*/ e(ORA, AbsoluteY, 4),
    /*1A*/ e(ILL_NOP, Implied, 2),
    /*1B*/ e(SLO, AbsoluteY, 7),
    /*1C*/ e(ILL_NOP, AbsoluteX, 4),
    /*1D*/ e(ORA, AbsoluteX, 4),
    /*1E*/ e(ASL, AbsoluteX, 7),
    /*1F*/ e(SLO, AbsoluteX, 7),
    /*20*/ e(JSR, Absolute, 6),
    /*21*/ e(AND, IndexedIndirect, 6),
    /*22*/ e(ILL_JAM, Implied, 0),
    /*23*/ e(RLA, IndexedIndirect, 8),
    /*24*/ e(BIT, ZeroPage, 3),
    /*25*/ e(AND, ZeroPage, 3),
    /*26*/ e(ROL, ZeroPage, 5),
    /*27*/ e(RLA, ZeroPage, 5),
    /*28*/ e(PLP, Implied, 4),
    /*29*/ e(AND, Immediate, 2),
    /*2A*/ e(ROL, Accumulator, 2),
    /*2B*/ e(ANC, Immediate, 2),
    /*2C*/ e(BIT, Absolute, 4),
    /*2D*/ e(AND, Absolute, 4),
    /*2E*/ e(ROL, Absolute, 6),
    /*2F*/ e(RLA, Absolute, 6),
    /*30*/ e(BMI, Relative, 2),
    /*31*/ e(AND, IndirectIndexed, 5),
    /*32*/ e(ILL_JAM, Implied, 0),
    /*33*/ e(RLA, IndirectIndexed, 8),
    /*34*/ e(ILL_NOP, ZeroPageX, 4),
    /*35*/ e(AND, ZeroPageX, 4),
    /*36*/ e(ROL, ZeroPageX, 6),
    /*37*/ e(RLA, ZeroPageX, 6),
    /*38*/ e(SEC, Implied, 2),
    /*39*/ e(AND, AbsoluteY, 4),
    /*3A*/ e(ILL_NOP, Implied, 2),
    /*3B*/ e(RLA, AbsoluteY, 7),
    /*3C*/ e(ILL_NOP, AbsoluteX, 4),
    /*3D*/ e(AND, AbsoluteX, 4),
    /*3E*/ e(ROL, AbsoluteX, 7),
    /*3F*/ e(RLA, AbsoluteX, 7),
    /*40*/ e(RTI, Implied, 6),
    /*41*/ e(EOR, IndexedIndirect, 6),
    /*42*/ e(ILL_JAM, Implied, 0),
    /*43*/ e(SRE, IndexedIndirect, 8),
    /*44*/ e(ILL_NOP, ZeroPage, 3),
    /*45*/ e(EOR, ZeroPage, 3),
    /*46*/ e(LSR, ZeroPage, 5),
    /*47*/ e(SRE, ZeroPage, 5),
    /*48*/ e(PHA, Implied, 3),
    /*49*/ e(EOR, Immediate, 2),
    /*4A*/ e(LSR, Accumulator, 2),
    /*4B*/ e(ALR, Immediate, 2),
    /*4C*/ e(JMP, Absolute, 3),
    /*4D*/ e(EOR, Absolute, 4),
    /*4E*/ e(LSR, Absolute, 6),
    /*4F*/ e(SRE, Absolute, 6),
    /*50*/ e(BVC, Relative, 2),
    /*51*/ e(EOR, IndirectIndexed, 5),
    /*52*/ e(ILL_JAM, Implied, 0),
    /*53*/ e(SRE, IndirectIndexed, 8),
    /*54*/ e(ILL_NOP, ZeroPageX, 4),
    /*55*/ e(EOR, ZeroPageX, 4),
    /*56*/ e(LSR, ZeroPageX, 6),
    /*57*/ e(SRE, ZeroPageX, 6),
    /*58*/ e(CLI, Implied, 2),
    /*59*/ e(EOR, AbsoluteY, 4),
    /*5A*/ e(ILL_NOP, Implied, 2),
    /*5B*/ e(SRE, AbsoluteY, 7),
    /*5C*/ e(ILL_NOP, AbsoluteX, 4),
    /*5D*/ e(EOR, AbsoluteX, 4),
    /*5E*/ e(LSR, AbsoluteX, 7),
    /*5F*/ e(SRE, AbsoluteX, 7),
    /*60*/ e(RTS, Implied, 6),
    /*61*/ e(ADC, IndexedIndirect, 6),
    /*62*/ e(ILL_JAM, Implied, 0),
    /*63*/ e(RRA, IndexedIndirect, 8),
    /*64*/ e(ILL_NOP, ZeroPage, 3),
    /*65*/ e(ADC, ZeroPage, 3),
    /*66*/ e(ROR, ZeroPage, 5),
    /*67*/ e(RRA, ZeroPage, 5),
    /*68*/ e(PLA, Implied, 4),
    /*69*/ e(ADC, Immediate, 2),
    /*6A*/ e(ROR, Accumulator, 2),
    /*6B*/ e(ARR, Immediate, 2),
    /*6C*/ e(JMP, Indirect, 5),
    /*6D*/ e(ADC, Absolute, 4),
    /*6E*/ e(ROR, Absolute, 6),
    /*6F*/ e(RRA, Absolute, 6),
    /*70*/ e(BVS, Relative, 2),
    /*71*/ e(ADC, IndirectIndexed, 5),
    /*72*/ e(ILL_JAM, Implied, 0),
    /*73*/ e(RRA, IndirectIndexed, 8),
    /*74*/ e(ILL_NOP, ZeroPageX, 4),
    /*75*/ e(ADC, ZeroPageX, 4),
    /*76*/ e(ROR, ZeroPageX, 6),
    /*77*/ e(RRA, ZeroPageX, 6),
    /*78*/ e(SEI, Implied, 2),
    /*79*/ e(ADC, AbsoluteY, 4),
    /*7A*/ e(ILL_NOP, Implied, 2),
    /*7B*/ e(RRA, AbsoluteY, 7),
    /*7C*/ e(ILL_NOP, AbsoluteX, 4),
    /*7D*/ e(ADC, AbsoluteX, 4),
    /*7E*/ e(ROR, AbsoluteX, 7),
    /*7F*/ e(RRA, AbsoluteX, 7),
    /*80*/ e(ILL_NOP, Immediate, 2),
    /*81*/ e(STA, IndexedIndirect, 6),
    /*82*/ e(ILL_NOP, Immediate, 2),
    /*83*/ e(SAX, IndexedIndirect, 6),
    /*84*/ e(STY, ZeroPage, 3),
    /*85*/ e(STA, ZeroPage, 3),
    /*86*/ e(STX, ZeroPage, 3),
    /*87*/ e(SAX, ZeroPage, 3),
    /*88*/ e(DEY, Implied, 2),
    /*89*/ e(ILL_NOP, Immediate, 2),
    /*8A*/ e(TXA, Implied, 2),
    /*8B*/ e(ANE, Immediate, 0),
    /*8C*/ e(STY, Absolute, 4),
    /*8D*/ e(STA, Absolute, 4),
    /*8E*/ e(STX, Absolute, 4),
    /*8F*/ e(SAX, Absolute, 4),
    /*90*/ e(BCC, Relative, 2),
    /*91*/ e(STA, IndirectIndexed, 6),
    /*92*/ e(ILL_JAM, Implied, 0),
    /*93*/ e(SHA, IndirectIndexed, 0),
    /*94*/ e(STY, ZeroPageX, 4),
    /*95*/ e(STA, ZeroPageX, 4),
    /*96*/ e(STX, ZeroPageY, 4),
    /*97*/ e(SAX, ZeroPageY, 4),
    /*98*/ e(TYA, Implied, 2),
    /*99*/ e(STA, AbsoluteY, 5),
    /*9A*/ e(TXS, Implied, 2),
    /*9B*/ e(TAS, AbsoluteY, 0),
    /*9C*/ e(SHY, AbsoluteX, 0),
    /*9D*/ e(STA, AbsoluteX, 5),
    /*9E*/ e(SHX, AbsoluteY, 0),
    /*9F*/ e(SHA, AbsoluteY, 0),
    /*A0*/ e(LDY, Immediate, 2),
    /*A1*/ e(LDA, IndexedIndirect, 6),
    /*A2*/ e(LDX, Immediate, 2),
    /*A3*/ e(LAX, IndexedIndirect, 6),
    /*A4*/ e(LDY, ZeroPage, 3),
    /*A5*/ e(LDA, ZeroPage, 3),
    /*A6*/ e(LDX, ZeroPage, 3),
    /*A7*/ e(LAX, ZeroPage, 3),
    /*A8*/ e(TAY, Implied, 2),
    /*A9*/ e(LDA, Immediate, 2),
    /*AA*/ e(TAX, Implied, 2),
    /*AB*/ e(LXA, Immediate, 2),
    /*AC*/ e(LDY, Absolute, 4),
    /*AD*/ e(LDA, Absolute, 4),
    /*AE*/ e(LDX, Absolute, 4),
    /*AF*/ e(LAX, Absolute, 4),
    /*B0*/ e(BCS, Relative, 2),
    /*B1*/ e(LDA, IndirectIndexed, 5),
    /*B2*/ e(ILL_JAM, Implied, 0),
    /*B3*/ e(LAX, IndirectIndexed, 5),
    /*B4*/ e(LDY, ZeroPageX, 4),
    /*B5*/ e(LDA, ZeroPageX, 4),
    /*B6*/ e(LDX, ZeroPageY, 4),
    /*B7*/ e(LAX, ZeroPageY, 4),
    /*B8*/ e(CLV, Implied, 2),
    /*B9*/ e(LDA, AbsoluteY, 4),
    /*BA*/ e(TSX, Implied, 2),
    /*BB*/ e(LAS, AbsoluteY, 4),
    /*BC*/ e(LDY, AbsoluteX, 4),
    /*BD*/ e(LDA, AbsoluteX, 4),
    /*BE*/ e(LDX, AbsoluteY, 4),
    /*BF*/ e(LAX, AbsoluteY, 4),
    /*C0*/ e(CPY, Immediate, 2),
    /*C1*/ e(CMP, IndexedIndirect, 6),
    /*C2*/ e(ILL_NOP, Immediate, 2),
    /*C3*/ e(DCP, IndexedIndirect, 8),
    /*C4*/ e(CPY, ZeroPage, 3),
    /*C5*/ e(CMP, ZeroPage, 3),
    /*C6*/ e(DEC, ZeroPage, 5),
    /*C7*/ e(DCP, ZeroPage, 5),
    /*C8*/ e(INY, Implied, 2),
    /*C9*/ e(CMP, Immediate, 2),
    /*CA*/ e(DEX, Implied, 2),
    /*CB*/ e(SBX, Immediate, 2),
    /*CC*/ e(CPY, Absolute, 4),
    /*CD*/ e(CMP, Absolute, 4),
    /*CE*/ e(DEC, Absolute, 6),
    /*CF*/ e(DCP, Absolute, 6),
    /*D0*/ e(BNE, Relative, 2),
    /*D1*/ e(CMP, IndirectIndexed, 5),
    /*D2*/ e(ILL_JAM, Implied, 0),
    /*D3*/ e(DCP, IndirectIndexed, 8),
    /*D4*/ e(ILL_NOP, ZeroPageX, 4),
    /*D5*/ e(CMP, ZeroPageX, 4),
    /*D6*/ e(DEC, ZeroPageX, 6),
    /*D7*/ e(DCP, ZeroPageX, 6),
    /*D8*/ e(CLD, Implied, 2),
    /*D9*/ e(CMP, AbsoluteY, 4),
    /*DA*/ e(ILL_NOP, Implied, 2),
    /*DB*/ e(DCP, AbsoluteY, 7),
    /*DC*/ e(ILL_NOP, AbsoluteX, 4),
    /*DD*/ e(CMP, AbsoluteX, 4),
    /*DE*/ e(DEC, AbsoluteX, 7),
    /*DF*/ e(DCP, AbsoluteX, 7),
    /*E0*/ e(CPX, Immediate, 2),
    /*E1*/ e(SBC, IndexedIndirect, 6),
    /*E2*/ e(ILL_NOP, Immediate, 2),
    /*E3*/ e(ISC, IndexedIndirect, 8),
    /*E4*/ e(CPX, ZeroPage, 3),
    /*E5*/ e(SBC, ZeroPage, 3),
    /*E6*/ e(INC, ZeroPage, 5),
    /*E7*/ e(ISC, ZeroPage, 5),
    /*E8*/ e(INX, Implied, 2),
    /*E9*/ e(SBC, Immediate, 2),
    /*EA*/ e(NOP, Implied, 2),
    /*EB*/ e(USBC, Immediate, 2),
    /*EC*/ e(CPX, Absolute, 4),
    /*ED*/ e(SBC, Absolute, 4),
    /*EE*/ e(INC, Absolute, 6),
    /*EF*/ e(ISC, Absolute, 6),
    /*F0*/ e(BEQ, Relative, 2),
    /*F1*/ e(SBC, IndirectIndexed, 5),
    /*F2*/ e(ILL_JAM, Implied, 0),
    /*F3*/ e(ISC, IndirectIndexed, 8),
    /*F4*/ e(ILL_NOP, ZeroPageX, 4),
    /*F5*/ e(SBC, ZeroPageX, 4),
    /*F6*/ e(INC, ZeroPageX, 6),
    /*F7*/ e(ISC, ZeroPageX, 6),
    /*F8*/ e(SED, Implied, 2),
    /*F9*/ e(SBC, AbsoluteY, 4),
    /*FA*/ e(ILL_NOP, Implied, 2),
    /*FB*/ e(ISC, AbsoluteY, 7),
    /*FC*/ e(ILL_NOP, AbsoluteX, 4),
    /*FD*/ e(SBC, AbsoluteX, 4),
    /*FE*/ e(INC, AbsoluteX, 7),
    /*FF*/ e(ISC, AbsoluteX, 7),
];

/// 3-letter mnemonic text, used by the disassembler/tracer. `*`-illegal
/// status is reported separately by the caller (see `debug::trace`).
pub fn mnemonic_str(m: Mnemonic) -> &'static str {
    match m {
        ADC => "ADC", AND => "AND", ASL => "ASL", BCC => "BCC", BCS => "BCS", BEQ => "BEQ",
        BIT => "BIT", BMI => "BMI", BNE => "BNE", BPL => "BPL", BRK => "BRK", BVC => "BVC",
        BVS => "BVS", CLC => "CLC", CLD => "CLD", CLI => "CLI", CLV => "CLV", CMP => "CMP",
        CPX => "CPX", CPY => "CPY", DEC => "DEC", DEX => "DEX", DEY => "DEY", EOR => "EOR",
        INC => "INC", INX => "INX", INY => "INY", JMP => "JMP", JSR => "JSR", LDA => "LDA",
        LDX => "LDX", LDY => "LDY", LSR => "LSR", NOP => "NOP", ORA => "ORA", PHA => "PHA",
        PHP => "PHP", PLA => "PLA", PLP => "PLP", ROL => "ROL", ROR => "ROR", RTI => "RTI",
        RTS => "RTS", SBC => "SBC", SEC => "SEC", SED => "SED", SEI => "SEI", STA => "STA",
        STX => "STX", STY => "STY", TAX => "TAX", TAY => "TAY", TSX => "TSX", TXA => "TXA",
        TXS => "TXS", TYA => "TYA",
        ALR => "ALR", ANC => "ANC", ANE => "ANE", ARR => "ARR", DCP => "DCP", ISC => "ISC",
        LAS => "LAS", LAX => "LAX", LXA => "LXA", RLA => "RLA", RRA => "RRA", SAX => "SAX",
        SBX => "SBX", SHA => "SHA", SHX => "SHX", SHY => "SHY", SLO => "SLO", SRE => "SRE",
        TAS => "TAS", USBC => "SBC", ILL_NOP => "NOP", ILL_JAM => "JAM",
    }
}

/// True for every mnemonic that nestest.log annotates with a leading `*`.
pub fn is_illegal(m: Mnemonic) -> bool {
    !matches!(
        m,
        ADC | AND | ASL | BCC | BCS | BEQ | BIT | BMI | BNE | BPL | BRK | BVC | BVS | CLC | CLD
            | CLI | CLV | CMP | CPX | CPY | DEC | DEX | DEY | EOR | INC | INX | INY | JMP | JSR
            | LDA | LDX | LDY | LSR | NOP | ORA | PHA | PHP | PLA | PLP | ROL | ROR | RTI | RTS
            | SBC | SEC | SED | SEI | STA | STX | STY | TAX | TAY | TSX | TXA | TXS | TYA
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_len_matches_mode_for_every_opcode() {
        for entry in OPCODE_TABLE.iter() {
            let len = entry.mode.byte_len();
            assert!((1..=3).contains(&len));
        }
    }

    #[test]
    fn jam_opcodes_have_zero_base_cycles() {
        for entry in OPCODE_TABLE.iter() {
            if entry.mnemonic == Mnemonic::ILL_JAM {
                assert_eq!(entry.cycles, 0);
            }
        }
    }

    #[test]
    fn stubbed_unstable_opcodes_have_zero_base_cycles() {
        // ANE/SHA/SHX/SHY/TAS are unstable enough on real hardware that this
        // core stubs them as fatal rather than modeling their behavior; that
        // contract depends on their table entries carrying 0 base cycles so
        // `execute::dispatch` returns before ever reaching their mnemonic.
        for entry in OPCODE_TABLE.iter() {
            if matches!(entry.mnemonic, Mnemonic::ANE | Mnemonic::SHA | Mnemonic::SHX | Mnemonic::SHY | Mnemonic::TAS) {
                assert_eq!(entry.cycles, 0, "{:?} must be a zero-cycle stub", entry.mnemonic);
            }
        }
    }

    #[test]
    fn brk_is_seven_cycles_implied() {
        let e = OPCODE_TABLE[0x00];
        assert_eq!(e.mnemonic, Mnemonic::BRK);
        assert_eq!(e.mode, AddressingMode::Implied);
        assert_eq!(e.cycles, 7);
    }
}
