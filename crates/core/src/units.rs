//! Length units and conversion
//!
//! The engine works internally in meters; the conversion pivots every value
//! through meters so adding a unit only requires the two rules for that unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Centimeters per meter conversion factor
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Supported length units for height input.
///
/// The set is closed: a unit that the engine does not know cannot be
/// constructed, so conversion never has to guess what an unknown tag means.
/// Text entering the system goes through [`FromStr`], which rejects anything
/// outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meter,
    Centimeter,
}

/// Error returned when parsing a unit tag that is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown length unit '{0}', expected 'meter' or 'centimeter'")]
pub struct UnknownUnit(String);

impl LengthUnit {
    /// Convert a value expressed in this unit to meters.
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            LengthUnit::Meter => value,
            LengthUnit::Centimeter => value / CENTIMETERS_PER_METER,
        }
    }

    /// Convert a value expressed in meters to this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            LengthUnit::Meter => meters,
            LengthUnit::Centimeter => meters * CENTIMETERS_PER_METER,
        }
    }

    /// The lowercase tag used for display and parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meter",
            LengthUnit::Centimeter => "centimeter",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meter" => Ok(LengthUnit::Meter),
            "centimeter" => Ok(LengthUnit::Centimeter),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// Convert a length value between two supported units.
///
/// Pivots through meters: `from` converts the value to meters, `to` converts
/// back out. Same-unit conversion returns the value untouched rather than
/// pivoting, so it is exactly the identity and never rounds. No validation
/// is performed; `NaN` and infinite inputs pass through unchanged.
///
/// # Example
/// ```
/// use bmi_core::{convert_length, LengthUnit};
///
/// let meters = convert_length(175.0, LengthUnit::Centimeter, LengthUnit::Meter);
/// assert_eq!(meters, 1.75);
/// ```
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_meters(from.to_meters(value))
}

/// A raw length value paired with the unit it was entered in.
///
/// Carries whatever the input field held, including zero, negative, or
/// non-finite values; degenerate input is resolved downstream by
/// classification, not rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub unit: LengthUnit,
    pub value: f64,
}

impl Measurement {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { unit, value }
    }

    /// The measured value expressed in meters.
    pub fn in_meters(self) -> f64 {
        self.unit.to_meters(self.value)
    }

    /// Re-express the measurement in another unit.
    pub fn convert_to(self, unit: LengthUnit) -> Measurement {
        Measurement {
            unit,
            value: convert_length(self.value, self.unit, unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn same_unit_conversion_is_identity() {
        // Exact equality: 1.75 and 0.07 would come back as
        // 1.7500000000000002 / 0.06999999999999999 if the conversion
        // pivoted through meters instead of short-circuiting.
        for v in [0.0, 1.75, 0.07, -3.0, 250.0] {
            assert_eq!(convert_length(v, LengthUnit::Meter, LengthUnit::Meter), v);
            assert_eq!(
                convert_length(v, LengthUnit::Centimeter, LengthUnit::Centimeter),
                v
            );
        }
    }

    #[test]
    fn centimeter_meter_fixed_points() {
        assert_eq!(
            convert_length(100.0, LengthUnit::Centimeter, LengthUnit::Meter),
            1.0
        );
        assert_eq!(
            convert_length(1.0, LengthUnit::Meter, LengthUnit::Centimeter),
            100.0
        );
    }

    #[test]
    fn round_trip_within_tolerance() {
        for v in [0.5, 1.63, 1.75, 2.11, 180.0] {
            let there = convert_length(v, LengthUnit::Meter, LengthUnit::Centimeter);
            let back = convert_length(there, LengthUnit::Centimeter, LengthUnit::Meter);
            assert_relative_eq!(back, v, max_relative = 1e-12);
        }
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(convert_length(f64::NAN, LengthUnit::Centimeter, LengthUnit::Meter).is_nan());
        assert_eq!(
            convert_length(f64::INFINITY, LengthUnit::Meter, LengthUnit::Centimeter),
            f64::INFINITY
        );
    }

    #[test]
    fn measurement_in_meters() {
        let height = Measurement::new(175.0, LengthUnit::Centimeter);
        assert_relative_eq!(height.in_meters(), 1.75);

        let converted = height.convert_to(LengthUnit::Meter);
        assert_eq!(converted.unit, LengthUnit::Meter);
        assert_relative_eq!(converted.value, 1.75);
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("meter".parse(), Ok(LengthUnit::Meter));
        assert_eq!("centimeter".parse(), Ok(LengthUnit::Centimeter));
        assert!("furlong".parse::<LengthUnit>().is_err());
        assert!("Meter".parse::<LengthUnit>().is_err());
    }
}
