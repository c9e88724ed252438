//! BMI Engine Core Library
//!
//! Pure numeric core for a body-mass-index form application: unit
//! conversion, BMI computation, category classification, and category
//! illustration lookup. Every operation is a stateless function of its
//! arguments; the display layer re-invokes the engine on each input change
//! and owns all mutable state, image fetching, and rendering.
//!
//! Degenerate input (empty fields read as zero, negative values, `NaN`)
//! never raises an error; it funnels into the undefined category and the
//! empty display state.

pub mod bmi;
pub mod category;
pub mod illustration;
pub mod units;

// Re-export the engine surface
pub use bmi::{compute_bmi, evaluate, format_bmi, BmiReading};
pub use category::{classify, BmiCategory};
pub use category::{NORMAL_LIMIT, OVERWEIGHT_THRESHOLD, UNDERWEIGHT_LIMIT};
pub use illustration::illustration_for;
pub use units::{convert_length, LengthUnit, Measurement, UnknownUnit};
