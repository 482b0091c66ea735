//! Translates winit keyboard events into the presentation layer's
//! host-agnostic [`KeyEvent`](crate::presentation::KeyEvent) — the only
//! place in this crate that names a `winit` type outside `display`.

use winit::keyboard::{KeyCode, PhysicalKey};

use crate::presentation::KeyEvent;

/// Converts a physical key press/release into a `KeyEvent`, or `None` for
/// the rare `PhysicalKey::Unidentified` case winit reports for keys it
/// can't map to a `KeyCode`.
pub fn translate(physical_key: PhysicalKey, pressed: bool) -> Option<KeyEvent> {
    match physical_key {
        PhysicalKey::Code(code) => Some(KeyEvent { key: keycode_name(code), pressed }),
        PhysicalKey::Unidentified(_) => None,
    }
}

fn keycode_name(code: KeyCode) -> String {
    format!("{code:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_translates_to_its_debug_name() {
        let event = translate(PhysicalKey::Code(KeyCode::KeyA), true).unwrap();
        assert_eq!(event.key, "KeyA");
        assert!(event.pressed);
    }
}
