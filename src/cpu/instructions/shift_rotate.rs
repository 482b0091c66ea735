//! ASL/LSR/ROL/ROR operate on the accumulator when addressing mode is
//! Accumulator, else on the memory location the operand resolved to. The
//! illegal SLO/SRE/RLA/RRA fuse a shift/rotate with an ORA/EOR/AND/ADC.

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

pub fn asl(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    cpu.assign_flag(flags::CARRY, value & 0x80 != 0);
    let result = value << 1;
    op.store(cpu, bus, result);
    cpu.update_zn(result);
    0
}

pub fn lsr(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    cpu.assign_flag(flags::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    op.store(cpu, bus, result);
    cpu.update_zn(result);
    0
}

pub fn rol(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    let carry_in = if cpu.flag(flags::CARRY) { 1 } else { 0 };
    cpu.assign_flag(flags::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    op.store(cpu, bus, result);
    cpu.update_zn(result);
    0
}

pub fn ror(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    let carry_in = if cpu.flag(flags::CARRY) { 0x80 } else { 0 };
    cpu.assign_flag(flags::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | carry_in;
    op.store(cpu, bus, result);
    cpu.update_zn(result);
    0
}

/// SLO: ASL memory, then ORA with the new value.
pub fn slo(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    cpu.assign_flag(flags::CARRY, value & 0x80 != 0);
    let shifted = value << 1;
    op.store(cpu, bus, shifted);
    cpu.a |= shifted;
    cpu.update_zn(cpu.a);
    0
}

/// SRE: LSR memory, then EOR with the new value.
pub fn sre(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    cpu.assign_flag(flags::CARRY, value & 0x01 != 0);
    let shifted = value >> 1;
    op.store(cpu, bus, shifted);
    cpu.a ^= shifted;
    cpu.update_zn(cpu.a);
    0
}

/// RLA: ROL memory, then AND with the new value.
pub fn rla(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    let carry_in = if cpu.flag(flags::CARRY) { 1 } else { 0 };
    cpu.assign_flag(flags::CARRY, value & 0x80 != 0);
    let rotated = (value << 1) | carry_in;
    op.store(cpu, bus, rotated);
    cpu.a &= rotated;
    cpu.update_zn(cpu.a);
    0
}

/// RRA: ROR memory, then ADC with the new value.
pub fn rra(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus);
    let carry_in = if cpu.flag(flags::CARRY) { 0x80 } else { 0 };
    cpu.assign_flag(flags::CARRY, value & 0x01 != 0);
    let rotated = (value >> 1) | carry_in;
    op.store(cpu, bus, rotated);
    super::arithmetic::adc_with_value(cpu, rotated);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;

    #[test]
    fn asl_shifts_bit_7_into_carry() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new(Cartridge::blank_nrom());
        bus.write(0x10, 0b1000_0001);
        asl(&mut cpu, &mut bus, Operand::Address(0x10));
        assert!(cpu.flag(flags::CARRY));
        assert_eq!(bus.read(0x10), 0b0000_0010);
    }

    #[test]
    fn ror_rotates_through_carry() {
        let mut cpu = Cpu::new();
        cpu.set_flag(flags::CARRY);
        let mut bus = Bus::new(Cartridge::blank_nrom());
        bus.write(0x10, 0b0000_0001);
        ror(&mut cpu, &mut bus, Operand::Address(0x10));
        assert!(cpu.flag(flags::CARRY));
        assert_eq!(bus.read(0x10), 0b1000_0000);
    }
}
