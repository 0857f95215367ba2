//! Picker configuration and the built-in presets.

use crate::constants::*;
use crate::domain::{default_decimal_places, Domain};
use crate::error::ConfigError;
use crate::gesture::Orientation;
use crate::snap::{SnapPolicy, SpringConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    pub domain: Domain,
    /// Always a legal domain value after `build()`.
    pub initial_value: f64,
    pub unit_label: String,
    /// Offset units (px or degrees) per item.
    pub unit_extent: f64,
    pub orientation: Orientation,
    pub snap: SnapPolicy,
    pub spring: SpringConfig,
    /// Signed deltas offered as quick-adjust buttons, e.g. `-10, -1, +1, +10`.
    pub quick_steps: Vec<f64>,
    /// Fixed values offered as quick-select chips.
    pub quick_values: Vec<f64>,
}

impl PickerConfig {
    pub fn builder(min: f64, max: f64, step: f64) -> PickerConfigBuilder {
        PickerConfigBuilder::new(min, max, step)
    }

    /// Vertical height ruler in centimetres, 100..=250.
    pub fn height_cm() -> Result<Self, ConfigError> {
        Self::builder(100.0, 250.0, 1.0)
            .initial_value(170.0)
            .unit_label("cm")
            .unit_extent(HEIGHT_ITEM_PX)
            .quick_steps([-10.0, -1.0, 1.0, 10.0])
            .build()
    }

    /// Vertical weight ruler in kilograms with 0.1 kg resolution.
    pub fn weight_kg() -> Result<Self, ConfigError> {
        Self::builder(30.0, 200.0, 0.1)
            .initial_value(70.0)
            .unit_label("kg")
            .unit_extent(WEIGHT_ITEM_PX)
            .quick_steps([-5.0, -1.0, -0.1, 0.1, 1.0, 5.0])
            .build()
    }

    /// Age dial, 10..=100 years, swiped horizontally.
    pub fn age_dial() -> Result<Self, ConfigError> {
        Self::builder(10.0, 100.0, 1.0)
            .initial_value(25.0)
            .unit_label("age")
            .unit_extent(AGE_DEGREES_PER_ITEM)
            .orientation(Orientation::Dial {
                degrees_per_px: DIAL_DEGREES_PER_PX,
            })
            .snap(SnapPolicy::Direct)
            .spring(SpringConfig::dial())
            .quick_steps([-10.0, -5.0, -1.0, 1.0, 5.0, 10.0])
            .quick_values([18.0, 25.0, 30.0, 35.0, 40.0, 50.0, 60.0])
            .build()
    }

    /// Re-checks the fields a caller may have edited after `build()`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.unit_extent.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "unit extent",
                value: self.unit_extent,
            });
        }
        if self.unit_extent <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "unit extent",
                value: self.unit_extent,
            });
        }
        if let Orientation::Dial { degrees_per_px } = self.orientation {
            if !(degrees_per_px.is_finite() && degrees_per_px > 0.0) {
                return Err(ConfigError::NonPositive {
                    name: "dial degrees per px",
                    value: degrees_per_px,
                });
            }
        }
        if !self.initial_value.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "initial value",
                value: self.initial_value,
            });
        }
        if let Some(&bad) = self
            .quick_steps
            .iter()
            .chain(&self.quick_values)
            .find(|v| !v.is_finite())
        {
            return Err(ConfigError::NotFinite {
                name: "quick adjust",
                value: bad,
            });
        }
        self.snap.validate()?;
        self.spring.validate()
    }

    /// Looks a preset up by name (`height`, `weight`, `age`).
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "height" | "height-cm" => Self::height_cm(),
            "weight" | "weight-kg" => Self::weight_kg(),
            "age" | "age-dial" => Self::age_dial(),
            _ => Err(ConfigError::UnknownPreset(name.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PickerConfigBuilder {
    min: f64,
    max: f64,
    step: f64,
    decimal_places: Option<u32>,
    initial_value: Option<f64>,
    unit_label: String,
    unit_extent: f64,
    orientation: Orientation,
    snap: SnapPolicy,
    spring: SpringConfig,
    quick_steps: Vec<f64>,
    quick_values: Vec<f64>,
}

impl PickerConfigBuilder {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            decimal_places: None,
            initial_value: None,
            unit_label: String::new(),
            unit_extent: WEIGHT_ITEM_PX,
            orientation: Orientation::Vertical,
            snap: SnapPolicy::momentum(),
            spring: SpringConfig::ruler(),
            quick_steps: Vec::new(),
            quick_values: Vec::new(),
        }
    }

    pub fn decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn unit_label(mut self, label: impl Into<String>) -> Self {
        self.unit_label = label.into();
        self
    }

    pub fn unit_extent(mut self, extent: f64) -> Self {
        self.unit_extent = extent;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn snap(mut self, snap: SnapPolicy) -> Self {
        self.snap = snap;
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn quick_steps(mut self, steps: impl IntoIterator<Item = f64>) -> Self {
        self.quick_steps = steps.into_iter().collect();
        self
    }

    pub fn quick_values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.quick_values = values.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<PickerConfig, ConfigError> {
        let places = self
            .decimal_places
            .unwrap_or_else(|| default_decimal_places(self.step));
        let domain = Domain::new(self.min, self.max, self.step, places)?;

        let initial = self.initial_value.unwrap_or(domain.min());
        if !initial.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "initial value",
                value: initial,
            });
        }
        let initial_value = domain.snap(initial);
        if !domain.contains(initial) {
            log::debug!(
                "[picker] initial value {} outside [{}, {}], clamped to {}",
                initial,
                domain.min(),
                domain.max(),
                initial_value
            );
        } else if initial_value != initial {
            log::debug!(
                "[picker] initial value {} adjusted to {}",
                initial,
                initial_value
            );
        }

        let config = PickerConfig {
            domain,
            initial_value,
            unit_label: self.unit_label,
            unit_extent: self.unit_extent,
            orientation: self.orientation,
            snap: self.snap,
            spring: self.spring,
            quick_steps: self.quick_steps,
            quick_values: self.quick_values,
        };
        config.validate()?;
        Ok(config)
    }
}
