//! Branch condition evaluation. Target resolution and the cycle/PC side
//! effects live in [`super::super::execute`]; this module only answers
//! "is the branch taken".

use crate::cpu::opcodes::Mnemonic;
use crate::cpu::{flags, Cpu};

pub fn condition(mnemonic: Mnemonic, cpu: &Cpu) -> bool {
    match mnemonic {
        Mnemonic::BCC => !cpu.flag(flags::CARRY),
        Mnemonic::BCS => cpu.flag(flags::CARRY),
        Mnemonic::BEQ => cpu.flag(flags::ZERO),
        Mnemonic::BNE => !cpu.flag(flags::ZERO),
        Mnemonic::BMI => cpu.flag(flags::NEGATIVE),
        Mnemonic::BPL => !cpu.flag(flags::NEGATIVE),
        Mnemonic::BVC => !cpu.flag(flags::OVERFLOW),
        Mnemonic::BVS => cpu.flag(flags::OVERFLOW),
        other => unreachable!("{other:?} is not a branch mnemonic"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beq_taken_when_zero_set() {
        let mut cpu = Cpu::new();
        cpu.set_flag(flags::ZERO);
        assert!(condition(Mnemonic::BEQ, &cpu));
        cpu.clear_flag(flags::ZERO);
        assert!(!condition(Mnemonic::BEQ, &cpu));
    }
}
