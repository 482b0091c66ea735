//! Translates `gilrs` gamepad events into the presentation layer's
//! host-agnostic [`KeyEvent`](crate::presentation::KeyEvent), mirroring
//! [`super::keyboard`] but for button press/release on any connected
//! controller (spec §6's controller mapping is keyboard-only; gamepad
//! support is ambient stack carried from the teacher, bound through the
//! same [`super::config::InputConfig`] table).

use gilrs::{Event, EventType, Gilrs};

use crate::presentation::KeyEvent;

/// Thin wrapper around a `Gilrs` instance; `poll` drains every pending event
/// since the last call into `KeyEvent`s the way [`super::keyboard::translate`]
/// does for winit.
pub struct GamepadSource {
    gilrs: Gilrs,
}

impl GamepadSource {
    pub fn new() -> Result<Self, gilrs::Error> {
        Ok(GamepadSource { gilrs: Gilrs::new()? })
    }

    pub fn poll(&mut self) -> Vec<KeyEvent> {
        let mut events = Vec::new();
        while let Some(Event { event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::ButtonPressed(button, _) => {
                    events.push(KeyEvent { key: format!("{button:?}"), pressed: true });
                }
                EventType::ButtonReleased(button, _) => {
                    events.push(KeyEvent { key: format!("{button:?}"), pressed: false });
                }
                _ => {}
            }
        }
        events
    }
}
