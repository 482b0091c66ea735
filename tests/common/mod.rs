// Shared helpers for ROM-based integration tests.

#![allow(dead_code)]

use nesframe::cartridge::Cartridge;
use nesframe::{Bus, Cpu};
use std::path::Path;

/// Maximum number of CPU cycles to run a test ROM before timing out.
pub const MAX_TEST_CYCLES: u64 = 50_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(u8),
    Timeout,
}

/// Loads an iNES file from disk and builds a `Cpu`/`Bus` pair from it, with
/// PC set from the reset vector (mirroring `Cpu::reset`, but without needing
/// an `Emulator` wrapper for tests that drive the CPU directly).
pub fn load_rom(path: &Path) -> Result<(Cpu, Bus), String> {
    let bytes = std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let cartridge = Cartridge::from_ines_bytes(&bytes).map_err(|e| e.to_string())?;
    let mut bus = Bus::new(cartridge);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    Ok((cpu, bus))
}

/// Many community test ROMs (blargg-style) signal completion by writing a
/// status byte to `$6000` (0 = running, 0x80 = running-but-ready, 1+ =
/// done) and a result code to `$6001`. Not used by the nestest ROM itself
/// (which instead reports through `$02`/`$03`), but kept here for any future
/// test ROM that follows the more common convention.
pub fn check_test_status(bus: &Bus) -> TestResult {
    match bus.peek(0x6000) {
        0 | 0x80..=0xFF => TestResult::Timeout,
        _ => match bus.peek(0x6001) {
            0 => TestResult::Passed,
            code => TestResult::Failed(code),
        },
    }
}
