//! The narrow collaborator interfaces spec §6 names: presentation
//! (`init`/`clear`/`render`/`poll_input`/`panic`) and the filesystem ROM
//! read. The core depends only on these traits, never on a concrete
//! windowing or I/O stack — `display::Window` is the one real implementation
//! this crate ships, built on the teacher's winit + pixels stack, but any
//! type implementing `Presentation` can drive an `Emulator`.

use crate::ppu::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A host key's state transition, already debounced by the presentation
/// layer; `Scheduler` translates `key` through an `InputConfig` binding
/// table into joypad button up/down calls (spec §4.5 step 4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub pressed: bool,
}

/// Everything the core needs from a presentation/host layer. None of this
/// is on the CPU/PPU hot path — it is polled and invoked once per scheduler
/// interval (spec §4.5), never per instruction or per scanline.
pub trait Presentation {
    /// One-time setup (open a window, grab an audio device, etc).
    fn init(&mut self) {}

    /// Clears the display between ROM loads; a no-op for headless hosts.
    fn clear(&mut self) {}

    /// Hands the just-completed frame to the host for display.
    fn render(&mut self, framebuffer: &[u32; SCREEN_WIDTH * SCREEN_HEIGHT]);

    /// Drains host input events accumulated since the last poll. Called
    /// once per scheduler interval, not once per key.
    fn poll_input(&mut self) -> Vec<KeyEvent>;

    /// Reports a fatal condition and does not return — spec §7's "no
    /// recovery paths exist for these inside the core; the emulator is
    /// expected to exit the main loop."
    fn panic(&mut self, message: &str) -> !;
}

/// Read a ROM's bytes from the filesystem collaborator (spec §6); kept as a
/// free function rather than a trait so tests and `main.rs` can use
/// `std::fs` directly without a dependency-injected indirection that this
/// crate has no second implementation of.
pub fn read_rom_file(path: &std::path::Path) -> Result<Vec<u8>, crate::error::EmulatorError> {
    std::fs::read(path).map_err(|e| crate::error::EmulatorError::RomReadFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        rendered_frames: u32,
        panicked: Option<String>,
    }

    impl Presentation for Recorder {
        fn render(&mut self, _framebuffer: &[u32; SCREEN_WIDTH * SCREEN_HEIGHT]) {
            self.rendered_frames += 1;
        }
        fn poll_input(&mut self) -> Vec<KeyEvent> {
            Vec::new()
        }
        fn panic(&mut self, message: &str) -> ! {
            panic!("{message}");
        }
    }

    #[test]
    fn default_init_and_clear_are_no_ops() {
        let mut recorder = Recorder { rendered_frames: 0, panicked: None };
        recorder.init();
        recorder.clear();
        recorder.render(&[0u32; SCREEN_WIDTH * SCREEN_HEIGHT]);
        assert_eq!(recorder.rendered_frames, 1);
        assert!(recorder.panicked.is_none());
    }

    #[test]
    fn read_rom_file_reports_missing_file_as_read_failure() {
        let err = read_rom_file(std::path::Path::new("/nonexistent/rom.nes")).unwrap_err();
        assert!(matches!(err, crate::error::EmulatorError::RomReadFailure(_)));
    }
}
