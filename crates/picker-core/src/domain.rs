//! Stepped value domain and its index space.
//!
//! A domain is the closed range `[min, max]` walked in fixed `step`s. The
//! last interval may be shorter than a step; such a trailing remainder is
//! simply not selectable. Index `i` maps to `min + i * step`, rounded to the
//! configured number of decimal places.

use crate::error::ConfigError;

/// Largest supported precision; `10^9` still leaves headroom in an `f64`.
pub const MAX_DECIMAL_PLACES: u32 = 9;

/// Largest index space a domain may span.
pub const MAX_ITEMS: usize = i32::MAX as usize;

// Absorbs float error in `(max - min) / step` so 30..200 by 0.1 has 1701 items.
const ITEM_COUNT_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
    step: f64,
    decimal_places: u32,
}

impl Domain {
    pub fn new(min: f64, max: f64, step: f64, decimal_places: u32) -> Result<Self, ConfigError> {
        for (name, value) in [("min", min), ("max", max), ("step", step)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::TooManyDecimalPlaces {
                got: decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }
        if step * 10f64.powi(decimal_places as i32) < 1.0 - ITEM_COUNT_EPSILON {
            return Err(ConfigError::StepBelowPrecision {
                step,
                decimal_places,
            });
        }
        let items = item_count(min, max, step);
        if !items.is_finite() || items > MAX_ITEMS as f64 {
            return Err(ConfigError::TooManyItems {
                items,
                max: MAX_ITEMS,
            });
        }
        Ok(Self {
            min,
            max,
            step,
            decimal_places,
        })
    }

    /// Same as [`Domain::new`] with one decimal place for fractional steps and
    /// none for whole steps.
    pub fn with_default_precision(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        Self::new(min, max, step, default_decimal_places(step))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// At most [`MAX_ITEMS`]; larger domains are rejected by [`Domain::new`].
    pub fn total_items(&self) -> usize {
        item_count(self.min, self.max, self.step) as usize
    }

    pub fn last_index(&self) -> usize {
        self.total_items() - 1
    }

    /// Value at `index`, which is clamped into the index space first.
    pub fn value_at(&self, index: usize) -> f64 {
        let index = index.min(self.last_index());
        round_to(self.min + index as f64 * self.step, self.decimal_places).clamp(self.min, self.max)
    }

    /// Nearest index for `value`. Out-of-range and NaN inputs clamp to the ends
    /// (NaN lands on index 0).
    pub fn index_of(&self, value: f64) -> usize {
        self.clamp_index((value - self.min) / self.step)
    }

    /// Rounds a fractional index half away from zero and clamps it.
    pub fn clamp_index(&self, raw: f64) -> usize {
        // `as` saturates: NaN -> 0, +inf -> i64::MAX.
        let rounded = raw.round() as i64;
        rounded.clamp(0, self.last_index() as i64) as usize
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Snaps an arbitrary value onto the nearest legal step.
    pub fn snap(&self, value: f64) -> f64 {
        self.value_at(self.index_of(self.clamp(value)))
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[inline]
fn item_count(min: f64, max: f64, step: f64) -> f64 {
    ((max - min) / step + ITEM_COUNT_EPSILON).floor() + 1.0
}

#[inline]
pub fn default_decimal_places(step: f64) -> u32 {
    if step < 1.0 {
        1
    } else {
        0
    }
}

/// Rounds half away from zero at `places` decimal places.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
