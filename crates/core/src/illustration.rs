//! Category illustrations
//!
//! Each category band maps to one fixed illustration URL. The engine only
//! resolves the identifier; fetching, caching, and retry behavior belong to
//! the host's image loader.

use crate::category::{classify, BmiCategory};

/// Illustration shown for the underweight band.
pub const UNDERWEIGHT_ILLUSTRATION: &str =
    "https://thumb.ac-illust.com/bf/bf056e85835c5493c6901b3b8f99adb0_t.jpeg";

/// Illustration shown for the normal band.
pub const NORMAL_ILLUSTRATION: &str =
    "https://thumb.ac-illust.com/97/97dda980ca6d9de6617a50011c71a8d5_t.jpeg";

/// Illustration shown for the overweight band.
pub const OVERWEIGHT_ILLUSTRATION: &str =
    "https://blogger.googleusercontent.com/img/b/R29vZ2xl/AVvXsEhfPnCD8SXUkZ8qcDXlAl23-VM8A9fIhh41-0s5ngthk1IOydii397IpcoybLGG9xdDdFY0Cx8Bic-Fa2OTk4bEv_CoXLA58oyQaVIlt88yg3T1kjCLEjr4SMFd8TwtILVKUa6YmwcHRl0W/s800/diet_before_man.png";

/// Resolve the illustration URL for a BMI value.
///
/// Derives from [`classify`], so the illustration bands always mirror the
/// category bands: whenever classification yields
/// [`BmiCategory::Undefined`] there is no illustration.
pub fn illustration_for(bmi: f64) -> Option<&'static str> {
    match classify(bmi) {
        BmiCategory::Underweight => Some(UNDERWEIGHT_ILLUSTRATION),
        BmiCategory::Normal => Some(NORMAL_ILLUSTRATION),
        BmiCategory::Overweight => Some(OVERWEIGHT_ILLUSTRATION),
        BmiCategory::Undefined => None,
    }
}
