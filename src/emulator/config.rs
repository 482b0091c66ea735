//! Scheduler and debug-flag configuration, loaded from (or saved to) a TOML
//! file alongside the ROM the way the teacher's `emulator::config` does for
//! video/audio/hotkey settings — here scoped to what spec §4.5 and §7 name:
//! target CPU frequency, interval cadence, frequency limiting, and the two
//! mutually-exclusive debug flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::EmulatorError;

/// NTSC 6502 clock, in Hz.
pub const NTSC_CPU_HZ: f64 = 1_789_773.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Target CPU clock, in Hz. Defaults to NTSC (§4.5).
    pub target_cpu_hz: f64,
    /// Scheduler intervals per second (§4.5) — 60 for NTSC frame pacing.
    pub intervals_per_second: u32,
    /// When true, the scheduler sleeps out any interval that ran faster
    /// than wall time; when false it runs flat out (useful for the nestest
    /// conformance run, which wants no throttling at all).
    pub frequency_limiting: bool,
    /// Enables `Cpu`'s flat decode cache (§4.1). Mutually exclusive with
    /// `trace_instructions`.
    pub cache_instructions: bool,
    /// Enables nestest-log-compatible trace output (§4.1, §6).
    pub trace_instructions: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            target_cpu_hz: NTSC_CPU_HZ,
            intervals_per_second: 60,
            frequency_limiting: true,
            cache_instructions: false,
            trace_instructions: false,
        }
    }
}

impl EmulatorConfig {
    /// `EmulatorError::CacheWithTrace` (spec §7 item 4) is a fatal
    /// configuration error, checked once before the scheduler starts rather
    /// than on every `Cpu::step`.
    pub fn validate(&self) -> Result<(), EmulatorError> {
        if self.cache_instructions && self.trace_instructions {
            return Err(EmulatorError::CacheWithTrace);
        }
        Ok(())
    }

    /// CPU cycles owed to the scheduler per interval (§4.5 step 1).
    pub fn cycles_per_interval(&self) -> u64 {
        (self.target_cpu_hz / self.intervals_per_second as f64) as u64
    }

    pub fn interval_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.intervals_per_second as f64)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(&path).unwrap_or_else(|_| {
            let config = Self::default();
            let _ = config.save(&path);
            config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_ntsc_sixty_hertz() {
        let config = EmulatorConfig::default();
        assert_eq!(config.intervals_per_second, 60);
        assert_eq!(config.target_cpu_hz, NTSC_CPU_HZ);
    }

    #[test]
    fn cache_and_trace_together_is_rejected() {
        let config = EmulatorConfig { cache_instructions: true, trace_instructions: true, ..Default::default() };
        assert!(matches!(config.validate(), Err(EmulatorError::CacheWithTrace)));
    }

    #[test]
    fn cycles_per_interval_matches_ntsc_frame_budget() {
        let config = EmulatorConfig::default();
        // ~29830 CPU cycles per 1/60s interval at 1.789773 MHz.
        assert_eq!(config.cycles_per_interval(), 29829);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = EmulatorConfig { trace_instructions: true, ..Default::default() };
        let text = toml::to_string(&config).unwrap();
        let back: EmulatorConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, back);
    }
}
