//! NOP and the illegal NOP variants. The illegal NOPs still fetch their
//! operand byte(s) for cycle-count purposes (already accounted for by the
//! opcode table's base cycles and by `addressing::resolve` reading through
//! the bus), but discard the value.

pub fn nop() -> u64 {
    0
}
