//! C ABI for the BMI engine.
//!
//! Exposes the pure engine to a native host UI. Conventions follow standard
//! C practice: `0` is success, negative codes are errors, results are
//! written through out-pointers, and strings returned by the library live in
//! static storage and must not be freed by the caller.

use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::OnceLock;

use bmi_core::illustration::{
    NORMAL_ILLUSTRATION, OVERWEIGHT_ILLUSTRATION, UNDERWEIGHT_ILLUSTRATION,
};
use bmi_core::{classify, compute_bmi, convert_length, format_bmi, BmiCategory, LengthUnit};

// ============================================================================
// FFI ERROR AND TAG CODES FOR HOST INTEGRATION
// ============================================================================

/// Success code
pub const BMI_SUCCESS: i32 = 0;
/// Null pointer passed
pub const BMI_NULL_POINTER: i32 = -2;
/// Unit code outside the supported set
pub const BMI_INVALID_UNIT: i32 = -3;
/// Caller buffer too small for the rendered value
pub const BMI_BUFFER_TOO_SMALL: i32 = -4;

/// Unit code for meters
pub const BMI_UNIT_METER: u8 = 0;
/// Unit code for centimeters
pub const BMI_UNIT_CENTIMETER: u8 = 1;

/// Category code: degenerate or unclassifiable BMI
pub const BMI_CATEGORY_UNDEFINED: i32 = 0;
/// Category code: underweight band
pub const BMI_CATEGORY_UNDERWEIGHT: i32 = 1;
/// Category code: normal band
pub const BMI_CATEGORY_NORMAL: i32 = 2;
/// Category code: overweight band
pub const BMI_CATEGORY_OVERWEIGHT: i32 = 3;

fn unit_from_code(code: u8) -> Option<LengthUnit> {
    match code {
        BMI_UNIT_METER => Some(LengthUnit::Meter),
        BMI_UNIT_CENTIMETER => Some(LengthUnit::Centimeter),
        _ => None,
    }
}

fn category_code(category: BmiCategory) -> i32 {
    match category {
        BmiCategory::Undefined => BMI_CATEGORY_UNDEFINED,
        BmiCategory::Underweight => BMI_CATEGORY_UNDERWEIGHT,
        BmiCategory::Normal => BMI_CATEGORY_NORMAL,
        BmiCategory::Overweight => BMI_CATEGORY_OVERWEIGHT,
    }
}

/// NUL-terminated copies of the illustration URLs, allocated once and kept
/// for the process lifetime so returned pointers stay valid.
fn illustration_cstr(category: BmiCategory) -> Option<&'static CString> {
    static URLS: OnceLock<[CString; 3]> = OnceLock::new();
    let urls = URLS.get_or_init(|| {
        [
            CString::new(UNDERWEIGHT_ILLUSTRATION).unwrap(),
            CString::new(NORMAL_ILLUSTRATION).unwrap(),
            CString::new(OVERWEIGHT_ILLUSTRATION).unwrap(),
        ]
    });
    match category {
        BmiCategory::Underweight => Some(&urls[0]),
        BmiCategory::Normal => Some(&urls[1]),
        BmiCategory::Overweight => Some(&urls[2]),
        BmiCategory::Undefined => None,
    }
}

/// Convert a length value between units.
///
/// # Parameters
/// - `value`: The value to convert
/// - `from_unit`: Source unit code (`BMI_UNIT_METER` or `BMI_UNIT_CENTIMETER`)
/// - `to_unit`: Target unit code
/// - `out_value`: Pointer to receive the converted value
///
/// # Returns
/// - `BMI_SUCCESS` (0) on success, with `out_value` set
/// - `BMI_INVALID_UNIT` (-3) if either unit code is not in the supported set
/// - `BMI_NULL_POINTER` (-2) if `out_value` is null
///
/// # Safety
/// `out_value` must be a valid, non-null pointer.
#[no_mangle]
pub unsafe extern "C" fn bmi_convert_length(
    value: f64,
    from_unit: u8,
    to_unit: u8,
    out_value: *mut f64,
) -> i32 {
    if out_value.is_null() {
        return BMI_NULL_POINTER;
    }
    let (Some(from), Some(to)) = (unit_from_code(from_unit), unit_from_code(to_unit)) else {
        return BMI_INVALID_UNIT;
    };

    *out_value = convert_length(value, from, to);
    BMI_SUCCESS
}

/// Compute a BMI value from weight in kilograms and height in meters.
///
/// Infallible: degenerate input produces `Infinity` or `NaN`, which
/// `bmi_classify` resolves to `BMI_CATEGORY_UNDEFINED`.
#[no_mangle]
pub extern "C" fn bmi_compute(weight_kg: f64, height_m: f64) -> f64 {
    compute_bmi(weight_kg, height_m)
}

/// Classify a BMI value into its category band.
///
/// # Returns
/// One of the `BMI_CATEGORY_*` codes.
#[no_mangle]
pub extern "C" fn bmi_classify(bmi: f64) -> i32 {
    category_code(classify(bmi))
}

/// Resolve the illustration URL for a BMI value.
///
/// # Returns
/// A NUL-terminated UTF-8 string in static storage, or NULL when the value
/// classifies as undefined. The caller must not free the returned pointer;
/// it stays valid for the process lifetime.
#[no_mangle]
pub extern "C" fn bmi_illustration_url(bmi: f64) -> *const c_char {
    match illustration_cstr(classify(bmi)) {
        Some(url) => url.as_ptr(),
        None => std::ptr::null(),
    }
}

/// Render a BMI value with two fractional digits into a caller buffer.
///
/// # Parameters
/// - `bmi`: The value to render
/// - `buf`: Destination buffer for the NUL-terminated UTF-8 string
/// - `buf_len`: Capacity of `buf` in bytes
///
/// # Returns
/// - `BMI_SUCCESS` (0) on success
/// - `BMI_NULL_POINTER` (-2) if `buf` is null
/// - `BMI_BUFFER_TOO_SMALL` (-4) if `buf_len` cannot hold the rendering and
///   its NUL terminator
///
/// # Safety
/// `buf` must be a valid, non-null pointer to at least `buf_len` writable
/// bytes.
#[no_mangle]
pub unsafe extern "C" fn bmi_format_value(bmi: f64, buf: *mut c_char, buf_len: usize) -> i32 {
    if buf.is_null() {
        return BMI_NULL_POINTER;
    }
    let rendered = format_bmi(bmi);
    if rendered.len() + 1 > buf_len {
        return BMI_BUFFER_TOO_SMALL;
    }

    std::ptr::copy_nonoverlapping(rendered.as_ptr(), buf.cast::<u8>(), rendered.len());
    *buf.add(rendered.len()) = 0;
    BMI_SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn convert_length_writes_out_value() {
        let mut out = 0.0_f64;
        let code = unsafe {
            bmi_convert_length(175.0, BMI_UNIT_CENTIMETER, BMI_UNIT_METER, &mut out)
        };
        assert_eq!(code, BMI_SUCCESS);
        assert_eq!(out, 1.75);
    }

    #[test]
    fn convert_length_rejects_bad_inputs() {
        let mut out = 0.0_f64;
        let code = unsafe { bmi_convert_length(1.0, 7, BMI_UNIT_METER, &mut out) };
        assert_eq!(code, BMI_INVALID_UNIT);

        let code = unsafe {
            bmi_convert_length(1.0, BMI_UNIT_METER, BMI_UNIT_METER, std::ptr::null_mut())
        };
        assert_eq!(code, BMI_NULL_POINTER);
    }

    #[test]
    fn classify_codes_match_bands() {
        assert_eq!(bmi_classify(17.0), BMI_CATEGORY_UNDERWEIGHT);
        assert_eq!(bmi_classify(22.0), BMI_CATEGORY_NORMAL);
        assert_eq!(bmi_classify(30.0), BMI_CATEGORY_OVERWEIGHT);
        assert_eq!(bmi_classify(f64::NAN), BMI_CATEGORY_UNDEFINED);
        assert_eq!(bmi_classify(24.95), BMI_CATEGORY_UNDEFINED);
    }

    #[test]
    fn illustration_url_is_static_and_nullable() {
        let ptr = bmi_illustration_url(22.0);
        assert!(!ptr.is_null());
        let url = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(url, NORMAL_ILLUSTRATION);

        // Same pointer on repeated calls: static storage
        assert_eq!(ptr, bmi_illustration_url(22.0));

        assert!(bmi_illustration_url(f64::NAN).is_null());
    }

    #[test]
    fn format_value_into_buffer() {
        let mut buf: [std::os::raw::c_char; 16] = [0; 16];
        let code = unsafe { bmi_format_value(22.857, buf.as_mut_ptr(), buf.len()) };
        assert_eq!(code, BMI_SUCCESS);
        let rendered = unsafe { CStr::from_ptr(buf.as_ptr()) }.to_str().unwrap();
        assert_eq!(rendered, "22.86");

        let code = unsafe { bmi_format_value(22.857, buf.as_mut_ptr(), 3) };
        assert_eq!(code, BMI_BUFFER_TOO_SMALL);
    }

    #[test]
    fn compute_passes_degenerate_values_through() {
        assert_eq!(bmi_compute(70.0, 0.0), f64::INFINITY);
        assert!(bmi_compute(0.0, 0.0).is_nan());
    }
}
