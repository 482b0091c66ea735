//! nestest.log-compatible instruction tracing: one line per instruction,
//! formatted *before* that instruction executes, so register state reflects
//! what the instruction is about to see.
//!
//! Layout: `PCCC  BB BB BB  MMM OOOOO                       A:xx X:xx Y:xx P:xx SP:xx`
//! — 4-digit PC, the instruction's raw bytes (blank-padded to 3 slots), the
//! 3-letter mnemonic (`*`-prefixed for undocumented opcodes), the
//! disassembled operand with its post-dereference annotation, and the
//! register dump. This is the format `nestest.log` ships in and is the
//! reference this core's trace output is validated against (see
//! `tests/nestest.rs`).

use crate::bus::Bus;
use crate::cpu::opcodes::{self, AddressingMode, Mnemonic};
use crate::cpu::{Bytecode, Cpu};
use std::fmt::Write as _;

/// Appends one trace line for `bytecode`, about to execute at `cpu.pc`, to
/// `out`. Reads through [`Bus::peek`] rather than [`Bus::read`] so building
/// the trace never perturbs machine state (PPUDATA buffering, `$2002`'s
/// vblank latch, the joypad shift register).
pub fn format_line(cpu: &Cpu, bus: &Bus, bytecode: &Bytecode, out: &mut String) {
    let bytes_field = format_bytes(bytecode);
    let disasm = disassemble(cpu, bus, bytecode);

    let _ = write!(
        out,
        "{pc:04X}  {bytes:<8} {disasm:<32} A:{a:02X} X:{x:02X} Y:{y:02X} P:{p:02X} SP:{sp:02X} CYC:{cyc}",
        pc = cpu.pc,
        bytes = bytes_field,
        disasm = disasm,
        a = cpu.a,
        x = cpu.x,
        y = cpu.y,
        p = cpu.status,
        sp = cpu.sp,
        cyc = cpu.cycles,
    );
}

fn format_bytes(bytecode: &Bytecode) -> String {
    let mut parts = Vec::with_capacity(3);
    for i in 0..bytecode.len {
        parts.push(format!("{:02X}", bytecode.bytes[i as usize]));
    }
    parts.join(" ")
}

fn disassemble(cpu: &Cpu, bus: &Bus, bytecode: &Bytecode) -> String {
    let star = if opcodes::is_illegal(bytecode.mnemonic) { "*" } else { " " };
    let mnemonic = opcodes::mnemonic_str(bytecode.mnemonic);
    let b1 = bytecode.bytes[1];
    let b2 = bytecode.bytes[2];
    let abs16 = u16::from_le_bytes([b1, b2]);

    let operand = match bytecode.mode {
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Implied => String::new(),
        AddressingMode::Immediate => format!("#${b1:02X}"),
        AddressingMode::ZeroPage => {
            format!("${b1:02X} = {:02X}", bus.peek(b1 as u16))
        }
        AddressingMode::ZeroPageX => {
            let addr = b1.wrapping_add(cpu.x);
            format!("${b1:02X},X @ {addr:02X} = {:02X}", bus.peek(addr as u16))
        }
        AddressingMode::ZeroPageY => {
            let addr = b1.wrapping_add(cpu.y);
            format!("${b1:02X},Y @ {addr:02X} = {:02X}", bus.peek(addr as u16))
        }
        AddressingMode::Relative => {
            let offset = b1 as i8 as i16;
            let target = cpu.pc.wrapping_add(bytecode.len as u16).wrapping_add(offset as u16);
            format!("${target:04X}")
        }
        AddressingMode::Absolute => {
            if matches!(bytecode.mnemonic, Mnemonic::JMP | Mnemonic::JSR) {
                format!("${abs16:04X}")
            } else {
                format!("${abs16:04X} = {:02X}", bus.peek(abs16))
            }
        }
        AddressingMode::Indirect => {
            let hi_addr = (abs16 & 0xFF00) | (abs16.wrapping_add(1) & 0x00FF);
            let lo = bus.peek(abs16) as u16;
            let hi = bus.peek(hi_addr) as u16;
            format!("(${abs16:04X}) = {:04X}", (hi << 8) | lo)
        }
        AddressingMode::AbsoluteX => {
            let addr = abs16.wrapping_add(cpu.x as u16);
            format!("${abs16:04X},X @ {addr:04X} = {:02X}", bus.peek(addr))
        }
        AddressingMode::AbsoluteY => {
            let addr = abs16.wrapping_add(cpu.y as u16);
            format!("${abs16:04X},Y @ {addr:04X} = {:02X}", bus.peek(addr))
        }
        AddressingMode::IndexedIndirect => {
            let ptr = b1.wrapping_add(cpu.x);
            let lo = bus.peek(ptr as u16) as u16;
            let hi = bus.peek(ptr.wrapping_add(1) as u16) as u16;
            let addr = (hi << 8) | lo;
            format!("(${b1:02X},X) @ {ptr:02X} = {addr:04X} = {:02X}", bus.peek(addr))
        }
        AddressingMode::IndirectIndexed => {
            let lo = bus.peek(b1 as u16) as u16;
            let hi = bus.peek(b1.wrapping_add(1) as u16) as u16;
            let base = (hi << 8) | lo;
            let addr = base.wrapping_add(cpu.y as u16);
            format!("(${b1:02X}),Y = {base:04X} @ {addr:04X} = {:02X}", bus.peek(addr))
        }
    };

    if operand.is_empty() {
        format!("{star}{mnemonic}")
    } else {
        format!("{star}{mnemonic} {operand}")
    }
}
