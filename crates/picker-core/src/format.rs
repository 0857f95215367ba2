use crate::constants::CM_PER_INCH;
use std::fmt;

/// Value text at a fixed precision; whole-step domains print without a
/// fractional part.
#[inline]
pub fn format_value(value: f64, decimal_places: u32) -> String {
    format!("{:.*}", decimal_places as usize, value)
}

/// Value plus unit, e.g. `72.5 kg`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel<'a> {
    pub value: f64,
    pub decimal_places: u32,
    pub unit: &'a str,
}

impl fmt::Display for ValueLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format_value(self.value, self.decimal_places);
        if self.unit.is_empty() {
            f.write_str(&text)
        } else {
            write!(f, "{} {}", text, self.unit)
        }
    }
}

/// Whole feet and rounded inches for a height in centimetres. Rounding up to
/// 12 inches carries into the next foot.
pub fn cm_to_feet_inches(cm: f64) -> (u32, u32) {
    let total_inches = (cm.max(0.0) / CM_PER_INCH).round() as u32;
    (total_inches / 12, total_inches % 12)
}

pub fn format_feet_inches(cm: f64) -> String {
    let (feet, inches) = cm_to_feet_inches(cm);
    format!("{}'{}\"", feet, inches)
}
