use crate::domain::Domain;

/// A legal position in the domain: its index and the rounded value there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub value: f64,
}

impl Selection {
    pub fn at(index: usize, domain: &Domain) -> Self {
        let index = index.min(domain.last_index());
        Self {
            index,
            value: domain.value_at(index),
        }
    }

    pub fn nearest(value: f64, domain: &Domain) -> Self {
        Self::at(domain.index_of(domain.clamp(value)), domain)
    }
}

/// Maps a continuous offset to the nearest legal selection.
///
/// Total over all `f64` offsets: NaN resolves to index 0 and infinities
/// saturate to the ends. `unit_extent` must be positive (validated by the
/// picker configuration).
#[inline]
pub fn discretize(offset: f64, unit_extent: f64, domain: &Domain) -> Selection {
    Selection::at(domain.clamp_index(-offset / unit_extent), domain)
}

/// Grid offset of `index`; larger indices scroll further back.
#[inline]
pub fn grid_offset(index: usize, unit_extent: f64) -> f64 {
    -(index as f64) * unit_extent
}

#[inline]
pub fn nearest_grid_offset(offset: f64, unit_extent: f64, domain: &Domain) -> f64 {
    grid_offset(discretize(offset, unit_extent, domain).index, unit_extent)
}

/// Offset clamped to the scrollable extent of the grid, for drawing.
#[inline]
pub fn clamp_offset(offset: f64, unit_extent: f64, domain: &Domain) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(grid_offset(domain.last_index(), unit_extent), 0.0)
}
