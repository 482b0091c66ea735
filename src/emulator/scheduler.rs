//! Real-time CPU → PPU → I/O pacing loop (spec §4.5). Drives an [`Emulator`]
//! at the configured CPU frequency, one 1/60-second interval at a time:
//! run instructions until the interval's cycle budget is spent, sleep out
//! any remaining wall time, poll input, and hand the frame to the
//! presentation layer.

use std::time::Instant;

use super::{Emulator, EmulatorConfig};
use crate::error::EmulatorError;
use crate::input::InputConfig;
use crate::presentation::Presentation;

/// How often (in intervals) the scheduler logs a performance summary —
/// spec §4.5 step 6's "on-screen performance overlay" becomes a periodic
/// `log::info!` line here, since this crate's default presentation has no
/// on-screen overlay rendering of its own.
const PERF_LOG_INTERVAL: u64 = 300; // every 5s at 60 intervals/s

pub struct Scheduler<P: Presentation> {
    emulator: Emulator,
    presentation: P,
    input: InputConfig,
    /// CPU cycles run ahead of the current interval's budget, carried over
    /// so per-interval rounding doesn't accumulate drift across a long run
    /// (spec §4.5 step 2, "drain the accumulated cpuCycles").
    cycle_surplus: u64,
    interval_count: u64,
}

impl<P: Presentation> Scheduler<P> {
    pub fn new(emulator: Emulator, presentation: P, input: InputConfig) -> Self {
        Scheduler { emulator, presentation, input, cycle_surplus: 0, interval_count: 0 }
    }

    pub fn emulator(&self) -> &Emulator {
        &self.emulator
    }

    pub fn emulator_mut(&mut self) -> &mut Emulator {
        &mut self.emulator
    }

    /// Runs one 1/60-second interval: steps 1-6 of spec §4.5. Returns the
    /// CPU cycles actually consumed this interval.
    pub fn run_interval(&mut self, config: &EmulatorConfig) -> Result<u64, EmulatorError> {
        let started = Instant::now();
        let budget = config.cycles_per_interval();
        let owed = budget.saturating_sub(self.cycle_surplus);

        let consumed = self.emulator.run_cycles(owed.max(1))?;
        self.cycle_surplus = (self.cycle_surplus + consumed).saturating_sub(budget);

        if config.frequency_limiting {
            let elapsed = started.elapsed();
            let target = config.interval_duration();
            if elapsed < target {
                std::thread::sleep(target - elapsed);
            }
        }

        for event in self.presentation.poll_input() {
            if let Some(button) = self.input.resolve(&event.key) {
                self.emulator.set_button(button, event.pressed);
            }
        }

        self.presentation.render(self.emulator.framebuffer());

        self.interval_count += 1;
        if self.interval_count % PERF_LOG_INTERVAL == 0 {
            log::info!(
                "scheduler: {} intervals run, {} CPU cycles/interval budget",
                self.interval_count,
                budget
            );
        }

        Ok(consumed)
    }

    /// Runs intervals forever. A fatal `EmulatorError` is handed to the
    /// presentation layer's `panic` hook (spec §7), which does not return;
    /// this function's `Result` return type exists only for callers (tests,
    /// `main.rs`) that supply a presentation whose `panic` *does* return,
    /// such as one that logs and exits the process via `std::process::exit`.
    pub fn run(&mut self) -> Result<(), EmulatorError> {
        self.presentation.init();
        loop {
            let config = self.emulator.config().clone();
            if let Err(err) = self.run_interval(&config) {
                self.presentation.panic(&err.to_string());
            }
        }
    }
}
