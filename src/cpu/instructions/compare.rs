//! CMP/CPX/CPY: unsigned subtraction used only to set flags.

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

pub fn compare(cpu: &mut Cpu, register: u8, m: u8) {
    let result = register.wrapping_sub(m);
    cpu.assign_flag(flags::CARRY, register >= m);
    cpu.assign_flag(flags::ZERO, register == m);
    cpu.assign_flag(flags::NEGATIVE, result & 0x80 != 0);
}

pub fn cmp(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let m = op.load(cpu, bus);
    compare(cpu, cpu.a, m);
    0
}

pub fn cpx(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let m = op.load(cpu, bus);
    compare(cpu, cpu.x, m);
    0
}

pub fn cpy(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let m = op.load(cpu, bus);
    compare(cpu, cpu.y, m);
    0
}
