//! BMI computation
//!
//! `BMI = weight(kg) / height(m)²`. The computation performs no input
//! validation: a zero or negative height produces an infinite or `NaN`
//! result, which classification then resolves to the undefined/empty state.

use serde::{Deserialize, Serialize};

use crate::category::{classify, BmiCategory};
use crate::illustration::illustration_for;
use crate::units::Measurement;

/// Compute a BMI value from weight in kilograms and height in meters.
///
/// No guarding against degenerate input: `compute_bmi(w, 0.0)` is
/// `Infinity` (or `NaN` for `0/0`). Those values flow into
/// [`classify`](crate::classify) where they resolve to
/// [`BmiCategory::Undefined`].
///
/// # Example
/// ```
/// use bmi_core::compute_bmi;
///
/// let bmi = compute_bmi(70.0, 1.75);
/// assert!((bmi - 22.857).abs() < 0.001);
/// ```
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// One evaluated reading: the BMI value with its two derived views.
///
/// This is the bundle a display layer re-derives on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    /// Raw BMI value; may be non-finite for degenerate input.
    pub value: f64,
    pub category: BmiCategory,
    /// Illustration URL for the category band, absent when the category
    /// is undefined.
    pub illustration: Option<&'static str>,
}

impl BmiReading {
    /// The BMI value rendered with two fractional digits, as shown in the
    /// result field.
    pub fn formatted_value(&self) -> String {
        format_bmi(self.value)
    }
}

/// Render a BMI value with two fractional digits.
///
/// Non-finite values render the way Rust formats them (`NaN`, `inf`); the
/// display layer typically never shows these because it blanks the category
/// and illustration first.
pub fn format_bmi(value: f64) -> String {
    format!("{value:.2}")
}

/// Evaluate a full reading from weight and a height measurement.
///
/// Converts the height to meters, computes the BMI, classifies it, and
/// resolves the category illustration. Pure: identical inputs always
/// produce identical readings.
pub fn evaluate(weight_kg: f64, height: Measurement) -> BmiReading {
    let value = compute_bmi(weight_kg, height.in_meters());
    BmiReading {
        value,
        category: classify(value),
        illustration: illustration_for(value),
    }
}
