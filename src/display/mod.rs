//! Windowed presentation: a `winit` + `pixels` implementation of
//! [`crate::presentation::Presentation`], following the teacher's
//! `display::window` module. This is the one concrete collaborator this
//! crate ships; it is not exercised by the nestest/unit suite (spec §8 is a
//! core-only conformance test) and exists so `cargo run -- game.nes` puts
//! pixels on screen.

pub mod window;

pub use window::{Window, WindowConfig};
