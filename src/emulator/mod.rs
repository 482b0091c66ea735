//! Top-level aggregate: owns the `Cpu`, the `Bus` (which in turn owns the
//! `Ppu`, the `Joypad`, and the cartridge mapper), and the run configuration.
//! This is the "single `Emulator` aggregate holding typed fields" DESIGN
//! NOTES §9 asks for in place of the source's process-wide globals — every
//! mutation goes through `&mut self`, there is no shared mutable state
//! outside it.

pub mod config;
pub mod scheduler;

pub use config::EmulatorConfig;
pub use scheduler::Scheduler;

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::EmulatorError;
use crate::joypad::{Button, Joypad};
use crate::ppu::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
}

impl Emulator {
    /// Builds an `Emulator` from raw iNES bytes and validates `config`
    /// (rejecting `cache_instructions && trace_instructions` up front, per
    /// spec §7 item 4) before any instruction has a chance to run.
    pub fn load(rom_bytes: &[u8], config: EmulatorConfig) -> Result<Self, EmulatorError> {
        config.validate()?;
        let cartridge = Cartridge::from_ines_bytes(rom_bytes)?;
        let mut bus = Bus::new(cartridge);
        let mut cpu = Cpu::new();
        if config.cache_instructions {
            cpu.enable_cache();
        }
        if config.trace_instructions {
            cpu.enable_trace();
        }
        cpu.reset(&mut bus);
        Ok(Emulator { cpu, bus, config })
    }

    /// Resets CPU and PPU to power-on-adjacent state, as pressing the
    /// console's reset button would (spec §4.1 RESET, §8 scenario 5).
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn framebuffer(&self) -> &[u32; SCREEN_WIDTH * SCREEN_HEIGHT] {
        self.bus.ppu().framebuffer()
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.bus.joypad_mut().set(button, pressed);
    }

    pub fn joypad_mut(&mut self) -> &mut Joypad {
        self.bus.joypad_mut()
    }

    /// Executes exactly one CPU instruction, advances the PPU by its
    /// corresponding `cycles * 3` dots, and delivers a pending NMI (if the
    /// PPU just raised one) before the *next* instruction decodes — matching
    /// the strict CPU-then-PPU ordering DESIGN NOTES §5 requires. Returns
    /// the CPU cycles consumed, or `IllegalInstruction` if a JAM (or
    /// stubbed illegal) opcode was hit (spec §7 item 3).
    pub fn step_instruction(&mut self) -> Result<u64, EmulatorError> {
        let pc = self.cpu.pc;
        let mut trace_line = if self.cpu.trace_enabled() { Some(String::new()) } else { None };
        let cycles = self.cpu.step(&mut self.bus, trace_line.as_mut());
        if let Some(line) = trace_line {
            if !line.is_empty() {
                log::trace!(target: "nesframe::cpu_trace", "{line}");
            }
        }
        if cycles == 0 {
            let opcode = self.bus.peek(pc);
            return Err(EmulatorError::IllegalInstruction { pc, opcode });
        }
        let mut total_cycles = cycles;
        if self.bus.take_nmi() {
            let nmi_cycles = self.cpu.interrupt_nmi(&mut self.bus);
            self.cpu.cycles = self.cpu.cycles.wrapping_add(nmi_cycles);
            self.bus.instruction_finished(nmi_cycles);
            total_cycles += nmi_cycles;
        }
        Ok(total_cycles)
    }

    /// Runs instructions until at least `target_cycles` CPU cycles have
    /// elapsed since the call began, returning the total consumed (always
    /// `>= target_cycles` since instructions don't split across the
    /// boundary). Used both by the scheduler's per-interval budget (§4.5
    /// step 1) and directly by tests that want a fixed amount of emulated
    /// time without a wall-clock loop (§8 scenario 5).
    pub fn run_cycles(&mut self, target_cycles: u64) -> Result<u64, EmulatorError> {
        let mut consumed = 0u64;
        while consumed < target_cycles {
            consumed += self.step_instruction()?;
        }
        Ok(consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 16 + 16 * 1024 + 8 * 1024];
        rom[0..4].copy_from_slice(b"NES\x1a");
        rom[4] = 1;
        rom[5] = 1;
        rom
    }

    #[test]
    fn illegal_instruction_is_fatal() {
        let mut rom = blank_rom();
        // JAM opcode 0x02 at the reset vector target.
        let reset_vector_target = 0x8000usize;
        let prg_offset = 16 + reset_vector_target - 0x8000;
        rom[prg_offset] = 0x02;
        let config = EmulatorConfig { frequency_limiting: false, ..Default::default() };
        let mut emulator = Emulator::load(&rom, config).unwrap();
        let err = emulator.step_instruction().unwrap_err();
        assert!(matches!(err, EmulatorError::IllegalInstruction { opcode: 0x02, .. }));
    }

    #[test]
    fn stubbed_unstable_opcode_is_also_fatal() {
        let mut rom = blank_rom();
        // ANE ($8B) at the reset vector target: unstable-on-hardware, stubbed
        // as fatal rather than modeled (spec §7 item 3).
        let reset_vector_target = 0x8000usize;
        let prg_offset = 16 + reset_vector_target - 0x8000;
        rom[prg_offset] = 0x8B;
        let config = EmulatorConfig { frequency_limiting: false, ..Default::default() };
        let mut emulator = Emulator::load(&rom, config).unwrap();
        let err = emulator.step_instruction().unwrap_err();
        assert!(matches!(err, EmulatorError::IllegalInstruction { opcode: 0x8B, .. }));
    }

    #[test]
    fn cache_with_trace_is_rejected_at_load() {
        let rom = blank_rom();
        let config = EmulatorConfig { cache_instructions: true, trace_instructions: true, ..Default::default() };
        assert!(matches!(Emulator::load(&rom, config), Err(EmulatorError::CacheWithTrace)));
    }
}
