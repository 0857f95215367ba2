use thiserror::Error;

/// Rejected picker configuration. Raised at construction, never during
/// interaction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("min ({min}) is greater than max ({max})")]
    InvertedRange { min: f64, max: f64 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("step {step} cannot be represented with {decimal_places} decimal places")]
    StepBelowPrecision { step: f64, decimal_places: u32 },
    #[error("decimal places must be at most {max}, got {got}")]
    TooManyDecimalPlaces { got: u32, max: u32 },
    #[error("range holds {items} steps, at most {max} are supported")]
    TooManyItems { items: f64, max: usize },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("unknown picker preset `{0}`")]
    UnknownPreset(String),
}

/// Failure reported by a haptic channel. Always swallowed by the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HapticError {
    #[error("haptic feedback is not available on this device")]
    Unavailable,
    #[error("haptic request rejected: {0}")]
    Rejected(String),
}
