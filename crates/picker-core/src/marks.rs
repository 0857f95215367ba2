use crate::constants::{MAJOR_MARK_EVERY, MARK_TOLERANCE, MEDIUM_MARK_EVERY};

/// Ruler tick weight of a value. Drives both tick drawing and haptic tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Multiple of 10, drawn long with a label.
    Major,
    /// Multiple of 5.
    Medium,
    Minor,
}

impl Mark {
    pub fn classify(value: f64) -> Self {
        if is_multiple_of(value, MAJOR_MARK_EVERY) {
            Mark::Major
        } else if is_multiple_of(value, MEDIUM_MARK_EVERY) {
            Mark::Medium
        } else {
            Mark::Minor
        }
    }

    pub fn is_labelled(&self) -> bool {
        matches!(self, Mark::Major)
    }
}

/// True when `value` is within [`MARK_TOLERANCE`] of a multiple of `n`, on
/// either side.
#[inline]
pub fn is_multiple_of(value: f64, n: f64) -> bool {
    if !value.is_finite() || n <= 0.0 {
        return false;
    }
    let r = value.rem_euclid(n);
    r.min(n - r) < MARK_TOLERANCE
}
