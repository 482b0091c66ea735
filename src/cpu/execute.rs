//! Instruction dispatch: maps a decoded [`Bytecode`] to its handler in
//! [`super::instructions`], advances PC by the instruction length (control
//! flow instructions overwrite PC themselves), and returns the cycle count
//! (base cycles from the opcode table, +1 for branches taken).

use super::addressing;
use super::instructions;
use super::opcodes::Mnemonic;
use super::{Bytecode, Cpu};
use crate::bus::Bus;

pub fn dispatch(cpu: &mut Cpu, bus: &mut Bus, bytecode: &Bytecode) -> u64 {
    use Mnemonic::*;

    let base_cycles = super::opcodes::OPCODE_TABLE[bytecode.opcode as usize].cycles as u64;
    if base_cycles == 0 {
        // JAM: hangs the real CPU. Signal fatal to the scheduler.
        return 0;
    }

    let operand = addressing::resolve(cpu, bus, bytecode);
    let advance = bytecode.len as u16;

    let extra_cycles = match bytecode.mnemonic {
        // Load/store family
        LDA => instructions::load_store::lda(cpu, bus, operand),
        LDX => instructions::load_store::ldx(cpu, bus, operand),
        LDY => instructions::load_store::ldy(cpu, bus, operand),
        STA => instructions::load_store::sta(cpu, bus, operand),
        STX => instructions::load_store::stx(cpu, bus, operand),
        STY => instructions::load_store::sty(cpu, bus, operand),
        SAX => instructions::load_store::sax(cpu, bus, operand),
        LAX => instructions::load_store::lax(cpu, bus, operand),
        LAS => instructions::load_store::las(cpu, bus, operand),
        LXA => instructions::load_store::lxa(cpu, bus, operand),
        // SHA/SHX/SHY/TAS/ANE are unstable-on-hardware opcodes this core
        // stubs as fatal; their opcode-table entries carry 0 base cycles,
        // so `dispatch` already returned above before reaching this arm.
        SHA | SHX | SHY | TAS | ANE => {
            unreachable!("{:?} has zero base cycles and returns earlier", bytecode.mnemonic)
        }

        // Register transfers
        TAX => instructions::transfer::tax(cpu),
        TAY => instructions::transfer::tay(cpu),
        TXA => instructions::transfer::txa(cpu),
        TYA => instructions::transfer::tya(cpu),
        TSX => instructions::transfer::tsx(cpu),
        TXS => instructions::transfer::txs(cpu),

        // Stack
        PHA => instructions::stack::pha(cpu, bus),
        PHP => instructions::stack::php(cpu, bus),
        PLA => instructions::stack::pla(cpu, bus),
        PLP => instructions::stack::plp(cpu, bus),

        // Logic
        AND => instructions::logic::and(cpu, bus, operand),
        ORA => instructions::logic::ora(cpu, bus, operand),
        EOR => instructions::logic::eor(cpu, bus, operand),
        BIT => instructions::logic::bit(cpu, bus, operand),
        ANC => instructions::logic::anc(cpu, bus, operand),
        ALR => instructions::logic::alr(cpu, bus, operand),

        // Arithmetic
        ADC => instructions::arithmetic::adc(cpu, bus, operand),
        SBC => instructions::arithmetic::sbc(cpu, bus, operand),
        USBC => instructions::arithmetic::sbc(cpu, bus, operand),
        ARR => instructions::arithmetic::arr(cpu, bus, operand),
        SBX => instructions::arithmetic::sbx(cpu, bus, operand),
        INC => instructions::arithmetic::inc(cpu, bus, operand),
        DEC => instructions::arithmetic::dec(cpu, bus, operand),
        INX => instructions::arithmetic::inx(cpu),
        INY => instructions::arithmetic::iny(cpu),
        DEX => instructions::arithmetic::dex(cpu),
        DEY => instructions::arithmetic::dey(cpu),
        ISC => instructions::arithmetic::isc(cpu, bus, operand),
        DCP => instructions::arithmetic::dcp(cpu, bus, operand),

        // Shift / rotate
        ASL => instructions::shift_rotate::asl(cpu, bus, operand),
        LSR => instructions::shift_rotate::lsr(cpu, bus, operand),
        ROL => instructions::shift_rotate::rol(cpu, bus, operand),
        ROR => instructions::shift_rotate::ror(cpu, bus, operand),
        SLO => instructions::shift_rotate::slo(cpu, bus, operand),
        SRE => instructions::shift_rotate::sre(cpu, bus, operand),
        RLA => instructions::shift_rotate::rla(cpu, bus, operand),
        RRA => instructions::shift_rotate::rra(cpu, bus, operand),

        // Compare
        CMP => instructions::compare::cmp(cpu, bus, operand),
        CPX => instructions::compare::cpx(cpu, bus, operand),
        CPY => instructions::compare::cpy(cpu, bus, operand),

        // Branches (PC already possibly updated below)
        BCC | BCS | BEQ | BNE | BMI | BPL | BVC | BVS => {
            let taken = instructions::branch::condition(bytecode.mnemonic, cpu);
            if let addressing::Operand::Relative(target) = operand {
                if taken {
                    cpu.pc = target;
                    return base_cycles + 1;
                }
            }
            0
        }

        // Jumps / subroutine / BRK / RTI take full control of PC themselves.
        JMP => {
            instructions::jump_subroutine::jmp(cpu, operand);
            return base_cycles;
        }
        JSR => {
            instructions::jump_subroutine::jsr(cpu, bus, bytecode);
            return base_cycles;
        }
        RTS => {
            instructions::jump_subroutine::rts(cpu, bus);
            return base_cycles;
        }
        RTI => {
            instructions::jump_subroutine::rti(cpu, bus);
            return base_cycles;
        }
        BRK => {
            instructions::jump_subroutine::brk(cpu, bus);
            return base_cycles;
        }

        // Flags
        CLC => instructions::flags::clc(cpu),
        SEC => instructions::flags::sec(cpu),
        CLI => instructions::flags::cli(cpu),
        SEI => instructions::flags::sei(cpu),
        CLV => instructions::flags::clv(cpu),
        CLD => instructions::flags::cld(cpu),
        SED => instructions::flags::sed(cpu),

        // Misc / NOPs
        NOP | ILL_NOP => instructions::miscellaneous::nop(),
        ILL_JAM => unreachable!("JAM has zero base cycles and returns earlier"),
    };

    cpu.pc = cpu.pc.wrapping_add(advance);
    base_cycles + extra_cycles
}
