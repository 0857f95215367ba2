use crate::constants::KEY_COARSE_STEPS;

/// What a key press asks of the focused picker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    /// Move by this many domain steps (signed).
    Steps(f64),
    ToMin,
    ToMax,
    /// Select the n-th quick value (0-based).
    Quick(usize),
}

#[inline]
pub fn action_for_key(key: &str, shift: bool) -> Option<KeyAction> {
    let steps = if shift { KEY_COARSE_STEPS } else { 1.0 };
    match key {
        "ArrowUp" | "ArrowRight" | "+" | "=" => Some(KeyAction::Steps(steps)),
        "ArrowDown" | "ArrowLeft" | "-" | "_" => Some(KeyAction::Steps(-steps)),
        "PageUp" => Some(KeyAction::Steps(KEY_COARSE_STEPS)),
        "PageDown" => Some(KeyAction::Steps(-KEY_COARSE_STEPS)),
        "Home" => Some(KeyAction::ToMin),
        "End" => Some(KeyAction::ToMax),
        _ => quick_slot_for_digit(key).map(KeyAction::Quick),
    }
}

/// `1`..`9` pick quick values 0..8.
#[inline]
pub fn quick_slot_for_digit(key: &str) -> Option<usize> {
    match key.as_bytes() {
        [d @ b'1'..=b'9'] => Some((d - b'1') as usize),
        _ => None,
    }
}
