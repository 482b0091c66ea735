//! ADC/SBC and the INC/DEC family, plus their illegal fusions (ISC, DCP,
//! SBX, ARR). Decimal mode is never applied: the NES 2A03 lacks BCD, so the
//! D flag is tracked (for PHP/PLP round-tripping) but never consulted here.

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

/// A ← A + M + C. Carry set iff the unsigned sum exceeds 0xFF; overflow
/// set iff the two inputs share a sign that differs from the result's sign.
pub fn adc(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let m = op.load(cpu, bus);
    add_with_carry(cpu, m);
    0
}

/// SBC is ADC with the operand bitwise-inverted — the textbook identity
/// `A - M - (1-C) == A + !M + C`.
pub fn sbc(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let m = op.load(cpu, bus);
    add_with_carry(cpu, !m);
    0
}

/// Exposed for RRA, which must ADC against a value it just rotated rather
/// than one `Operand` can load.
pub fn adc_with_value(cpu: &mut Cpu, m: u8) {
    add_with_carry(cpu, m);
}

fn add_with_carry(cpu: &mut Cpu, m: u8) {
    let carry_in = if cpu.flag(flags::CARRY) { 1u16 } else { 0 };
    let a = cpu.a;
    let sum = a as u16 + m as u16 + carry_in;
    let result = sum as u8;
    cpu.assign_flag(flags::CARRY, sum > 0xFF);
    cpu.assign_flag(flags::OVERFLOW, (a ^ result) & (m ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.update_zn(cpu.a);
}

pub fn inc(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus).wrapping_add(1);
    op.store(cpu, bus, value);
    cpu.update_zn(value);
    0
}

pub fn dec(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus).wrapping_sub(1);
    op.store(cpu, bus, value);
    cpu.update_zn(value);
    0
}

pub fn inx(cpu: &mut Cpu) -> u64 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
    0
}

pub fn iny(cpu: &mut Cpu) -> u64 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
    0
}

pub fn dex(cpu: &mut Cpu) -> u64 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
    0
}

pub fn dey(cpu: &mut Cpu) -> u64 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
    0
}

/// ISC (a.k.a. ISB): INC memory then SBC with the new value.
pub fn isc(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus).wrapping_add(1);
    op.store(cpu, bus, value);
    add_with_carry(cpu, !value);
    0
}

/// DCP: DEC memory then CMP against the new value.
pub fn dcp(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let value = op.load(cpu, bus).wrapping_sub(1);
    op.store(cpu, bus, value);
    super::compare::compare(cpu, cpu.a, value);
    0
}

/// SBX: (A & X) - M -> X, no borrow-in, carry set on no-borrow.
pub fn sbx(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let m = op.load(cpu, bus);
    let base = cpu.a & cpu.x;
    let result = base.wrapping_sub(m);
    cpu.assign_flag(flags::CARRY, base >= m);
    cpu.x = result;
    cpu.update_zn(result);
    0
}

/// ARR: AND with accumulator, then rotate right through carry; C/V derived
/// from the post-rotate bits 6 and 5 per the documented quirky behavior.
pub fn arr(cpu: &mut Cpu, bus: &mut Bus, op: Operand) -> u64 {
    let m = op.load(cpu, bus);
    let carry_in = if cpu.flag(flags::CARRY) { 0x80 } else { 0 };
    let anded = cpu.a & m;
    let result = (anded >> 1) | carry_in;
    cpu.a = result;
    cpu.update_zn(result);
    cpu.assign_flag(flags::CARRY, result & 0x40 != 0);
    let bit6 = (result & 0x40) != 0;
    let bit5 = (result & 0x20) != 0;
    cpu.assign_flag(flags::OVERFLOW, bit6 ^ bit5);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;

    #[test]
    fn adc_sets_carry_and_overflow_on_signed_overflow() {
        let mut cpu = Cpu::new();
        cpu.a = 0x7F;
        let mut bus = Bus::new(Cartridge::blank_nrom());
        bus.write(0x10, 0x01);
        adc(&mut cpu, &mut bus, Operand::Address(0x10));
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.flag(flags::OVERFLOW));
        assert!(!cpu.flag(flags::CARRY));
        assert!(cpu.flag(flags::NEGATIVE));
    }

    #[test]
    fn sbc_via_inverted_operand_identity() {
        let mut cpu = Cpu::new();
        cpu.a = 0x05;
        cpu.set_flag(flags::CARRY);
        let mut bus = Bus::new(Cartridge::blank_nrom());
        bus.write(0x10, 0x03);
        sbc(&mut cpu, &mut bus, Operand::Address(0x10));
        assert_eq!(cpu.a, 0x02);
        assert!(cpu.flag(flags::CARRY));
    }

    #[test]
    fn dex_wraps_to_0xff() {
        let mut cpu = Cpu::new();
        cpu.x = 0;
        dex(&mut cpu);
        assert_eq!(cpu.x, 0xFF);
        assert!(cpu.flag(flags::NEGATIVE));
    }
}
