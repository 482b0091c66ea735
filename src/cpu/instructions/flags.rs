//! The seven flag-set/clear instructions. None of these touch Z/N.

use crate::cpu::{flags as flag_bits, Cpu};

pub fn clc(cpu: &mut Cpu) -> u64 {
    cpu.clear_flag(flag_bits::CARRY);
    0
}

pub fn sec(cpu: &mut Cpu) -> u64 {
    cpu.set_flag(flag_bits::CARRY);
    0
}

pub fn cli(cpu: &mut Cpu) -> u64 {
    cpu.clear_flag(flag_bits::INTERRUPT_DISABLE);
    0
}

pub fn sei(cpu: &mut Cpu) -> u64 {
    cpu.set_flag(flag_bits::INTERRUPT_DISABLE);
    0
}

pub fn clv(cpu: &mut Cpu) -> u64 {
    cpu.clear_flag(flag_bits::OVERFLOW);
    0
}

pub fn cld(cpu: &mut Cpu) -> u64 {
    cpu.clear_flag(flag_bits::DECIMAL);
    0
}

pub fn sed(cpu: &mut Cpu) -> u64 {
    cpu.set_flag(flag_bits::DECIMAL);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sec_then_clc() {
        let mut cpu = Cpu::new();
        sec(&mut cpu);
        assert!(cpu.flag(flag_bits::CARRY));
        clc(&mut cpu);
        assert!(!cpu.flag(flag_bits::CARRY));
    }
}
