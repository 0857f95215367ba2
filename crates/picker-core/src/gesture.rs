//! Continuous drag tracking.
//!
//! The tracker knows nothing about steps or values: it turns the host's 2-D
//! pointer samples into a single signed offset along the picker's axis.

use glam::DVec2;

/// How a 2-D drag maps onto the picker's offset axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    /// Ruler scrolled up/down; offset in pixels.
    Vertical,
    /// Ruler scrolled left/right; offset in pixels.
    Horizontal,
    /// Rotating dial driven by horizontal swipes; offset in degrees.
    Dial { degrees_per_px: f64 },
}

impl Orientation {
    #[inline]
    pub fn project(&self, v: DVec2) -> f64 {
        match *self {
            Orientation::Vertical => v.y,
            Orientation::Horizontal => v.x,
            Orientation::Dial { degrees_per_px } => v.x * degrees_per_px,
        }
    }
}

/// One pointer sample: translation accumulated since the gesture started and
/// the instantaneous velocity, both in host pixels (velocity per millisecond).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub translation: DVec2,
    pub velocity: DVec2,
}

impl GestureSample {
    pub fn new(translation: DVec2, velocity: DVec2) -> Self {
        Self {
            translation,
            velocity,
        }
    }

    /// Sample for a purely one-dimensional drag along `orientation`'s axis.
    pub fn along(orientation: Orientation, distance_px: f64, velocity_px_per_ms: f64) -> Self {
        let axis = match orientation {
            Orientation::Vertical => DVec2::Y,
            Orientation::Horizontal | Orientation::Dial { .. } => DVec2::X,
        };
        Self::new(axis * distance_px, axis * velocity_px_per_ms)
    }
}

/// State of one drag, created on start and consumed on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub origin_offset: f64,
    pub current_offset: f64,
    /// Offset units per millisecond.
    pub velocity: f64,
}

impl Session {
    pub fn displacement(&self) -> f64 {
        self.current_offset - self.origin_offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tracked {
    pub offset: f64,
    pub velocity: f64,
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    orientation: Orientation,
    session: Option<Session>,
}

impl GestureTracker {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            session: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Starts a drag at `origin_offset`, replacing any unfinished session.
    pub fn begin(&mut self, origin_offset: f64) {
        self.session = Some(Session {
            origin_offset,
            current_offset: origin_offset,
            velocity: 0.0,
        });
    }

    /// Applies a sample. Returns `None` when no drag is active.
    pub fn track(&mut self, sample: GestureSample) -> Option<Tracked> {
        let orientation = self.orientation;
        let session = self.session.as_mut()?;
        let displacement = orientation.project(sample.translation);
        if displacement.is_finite() {
            session.current_offset = session.origin_offset + displacement;
        }
        let velocity = orientation.project(sample.velocity);
        session.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        Some(Tracked {
            offset: session.current_offset,
            velocity: session.velocity,
        })
    }

    /// Applies the release sample and hands back the finished session.
    pub fn finish(&mut self, sample: GestureSample) -> Option<Session> {
        self.track(sample)?;
        self.session.take()
    }

    /// Drops the active session without a release.
    pub fn abort(&mut self) -> Option<Session> {
        self.session.take()
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
