//! `nesframe`: a cycle-timed NES (6502 + PPU) emulator core.
//!
//! The hard engineering lives in [`cpu`], [`bus`], [`ppu`], and [`joypad`] —
//! a 6502 interpreter, the memory-mapped bus tying it to the PPU and
//! controller, and a per-scanline PPU state machine. [`emulator`] wraps
//! those into a runnable whole: [`emulator::Emulator`] is the aggregate,
//! [`emulator::scheduler::Scheduler`] is the real-time pacing loop. Audio,
//! mappers beyond NROM, save states, and a cycle-exact PPU pixel pipeline
//! are out of scope (see `spec.md`).

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod error;
pub mod input;
pub mod joypad;
pub mod ppu;
pub mod presentation;

pub use bus::Bus;
pub use cartridge::Cartridge;
pub use cpu::Cpu;
pub use emulator::{Emulator, EmulatorConfig, Scheduler};
pub use error::EmulatorError;
pub use input::InputConfig;
pub use joypad::{Button, Joypad};
pub use ppu::Ppu;
pub use presentation::{KeyEvent, Presentation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emulator_boots_from_a_blank_nrom_image() {
        let mut rom = vec![0u8; 16 + 16 * 1024 + 8 * 1024];
        rom[0..4].copy_from_slice(b"NES\x1a");
        rom[4] = 1;
        rom[5] = 1;
        let emulator = Emulator::load(&rom, EmulatorConfig::default()).unwrap();
        assert_eq!(emulator.cpu().sp, 0xFD);
    }
}
