//! Visible tick window around the selection indicator.
//!
//! Ticks fade and shrink with their distance from the indicator, so a renderer
//! only needs positions and the three falloff factors.

use crate::constants::{VIEW_FALLOFF_ITEMS, VIEW_OPACITY, VIEW_SCALE, VIEW_SHIFT};
use crate::domain::Domain;
use crate::marks::Mark;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub value: f64,
    pub mark: Mark,
    /// Signed distance from the indicator in offset units (px or degrees).
    pub position: f64,
    pub scale: f64,
    pub opacity: f64,
    /// Lateral nudge towards the axis, in px.
    pub shift: f64,
}

/// Ticks within `radius_items` of the indicator, in index order.
pub fn visible_ticks(offset: f64, unit_extent: f64, domain: &Domain, radius_items: f64) -> Vec<Tick> {
    let center = if offset.is_finite() {
        -offset / unit_extent
    } else {
        0.0
    };
    let last = domain.last_index() as f64;
    if center + radius_items < 0.0 || center - radius_items > last {
        return Vec::new();
    }
    let lo = (center - radius_items).ceil().clamp(0.0, last) as usize;
    let hi = (center + radius_items).floor().clamp(0.0, last) as usize;

    (lo..=hi)
        .map(|index| {
            let distance = index as f64 - center;
            let value = domain.value_at(index);
            Tick {
                index,
                value,
                mark: Mark::classify(value),
                position: distance * unit_extent,
                scale: falloff(distance, &VIEW_SCALE),
                opacity: falloff(distance, &VIEW_OPACITY),
                shift: falloff(distance, &VIEW_SHIFT),
            }
        })
        .collect()
}

/// Piecewise-linear in `|distance|`, clamped past the last knot.
#[inline]
pub fn falloff(distance: f64, outputs: &[f64; 3]) -> f64 {
    let d = distance.abs();
    let knots = &VIEW_FALLOFF_ITEMS;
    if d <= knots[0] {
        return outputs[0];
    }
    for i in 1..knots.len() {
        if d <= knots[i] {
            let t = (d - knots[i - 1]) / (knots[i] - knots[i - 1]);
            return outputs[i - 1] + (outputs[i] - outputs[i - 1]) * t;
        }
    }
    outputs[knots.len() - 1]
}
