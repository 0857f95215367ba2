//! Haptic tier selection and best-effort emission.

use crate::error::HapticError;
use crate::marks::Mark;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticTier {
    Light,
    Medium,
    Strong,
    /// Release confirmation, independent of the value.
    Success,
}

impl HapticTier {
    pub fn for_value(value: f64) -> Self {
        match Mark::classify(value) {
            Mark::Major => HapticTier::Strong,
            Mark::Medium => HapticTier::Medium,
            Mark::Minor => HapticTier::Light,
        }
    }
}

/// Platform feedback device.
pub trait HapticChannel {
    fn emit(&mut self, tier: HapticTier) -> Result<(), HapticError>;
}

impl<F> HapticChannel for F
where
    F: FnMut(HapticTier) -> Result<(), HapticError>,
{
    fn emit(&mut self, tier: HapticTier) -> Result<(), HapticError> {
        self(tier)
    }
}

/// Channel for hosts without a feedback device.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticChannel for NoopHaptics {
    fn emit(&mut self, _tier: HapticTier) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Decides when to buzz and swallows channel failures.
pub struct HapticEmitter {
    channel: Box<dyn HapticChannel>,
    last_emitted: Option<f64>,
}

impl HapticEmitter {
    /// `initial` counts as already emitted so resting on it stays silent.
    pub fn new(channel: Box<dyn HapticChannel>, initial: Option<f64>) -> Self {
        Self {
            channel,
            last_emitted: initial,
        }
    }

    /// Fires the tier for a newly selected value, at most once per distinct
    /// value. Returns the tier that was attempted.
    pub fn on_selection(&mut self, value: f64) -> Option<HapticTier> {
        if self.last_emitted == Some(value) {
            return None;
        }
        self.last_emitted = Some(value);
        let tier = HapticTier::for_value(value);
        self.fire(tier);
        Some(tier)
    }

    /// Fires the release confirmation.
    pub fn confirm(&mut self) -> HapticTier {
        self.fire(HapticTier::Success);
        HapticTier::Success
    }

    pub fn last_emitted(&self) -> Option<f64> {
        self.last_emitted
    }

    fn fire(&mut self, tier: HapticTier) {
        if let Err(e) = self.channel.emit(tier) {
            log::debug!("[haptics] {:?} dropped: {}", tier, e);
        }
    }
}

impl std::fmt::Debug for HapticEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HapticEmitter")
            .field("last_emitted", &self.last_emitted)
            .finish_non_exhaustive()
    }
}
