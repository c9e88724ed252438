//! BMI category classification
//!
//! Half-open bands over the BMI value. Degenerate input (non-finite or
//! non-positive) classifies as [`BmiCategory::Undefined`] rather than
//! raising an error, so the display layer can fall back to an empty state
//! without handling failures.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound (exclusive) of the underweight band.
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;

/// Upper bound (exclusive) of the normal band.
pub const NORMAL_LIMIT: f64 = 24.9;

/// Lower bound (inclusive) of the overweight band.
pub const OVERWEIGHT_THRESHOLD: f64 = 25.0;

/// Qualitative classification of a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// Non-finite or non-positive BMI, or a value in the uncovered band
    /// between [`NORMAL_LIMIT`] and [`OVERWEIGHT_THRESHOLD`].
    Undefined,
    Underweight,
    Normal,
    Overweight,
}

impl BmiCategory {
    /// The label shown next to the BMI value.
    ///
    /// `Undefined` maps to the empty string: the display contract for
    /// degenerate input is an empty category field, not an error message.
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Undefined => "",
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a BMI value into its category band.
///
/// Bands:
/// - below [`UNDERWEIGHT_LIMIT`]: underweight
/// - `[18.5, 24.9)`: normal
/// - `[25.0, ∞)`: overweight
/// - anything else: undefined
///
/// Note the normal band ends at 24.9 while the overweight band begins at
/// 25.0. Values in `[24.9, 25.0)` therefore classify as `Undefined`. This
/// reproduces the upstream band table as shipped; a debug event is emitted
/// when a value lands there so the discrepancy is visible in logs.
///
/// # Example
/// ```
/// use bmi_core::{classify, BmiCategory};
///
/// assert_eq!(classify(22.0), BmiCategory::Normal);
/// assert_eq!(classify(f64::NAN), BmiCategory::Undefined);
/// ```
pub fn classify(bmi: f64) -> BmiCategory {
    if !bmi.is_finite() || bmi <= 0.0 {
        return BmiCategory::Undefined;
    }

    if bmi < UNDERWEIGHT_LIMIT {
        BmiCategory::Underweight
    } else if bmi < NORMAL_LIMIT {
        BmiCategory::Normal
    } else if bmi >= OVERWEIGHT_THRESHOLD {
        BmiCategory::Overweight
    } else {
        // [24.9, 25.0): uncovered by the band table
        debug!(bmi, "BMI falls between the normal and overweight bands");
        BmiCategory::Undefined
    }
}
