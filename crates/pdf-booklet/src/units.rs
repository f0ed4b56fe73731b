//! Length parameters such as `5mm`, `-0.25in` or `1.5cm`.

use crate::constants::{UNITS_PER_INCH, UNITS_PER_MM};
use crate::types::*;

/// Parse an adjustment parameter into whole points.
///
/// `None` means "no adjustment" and yields 0. Surrounding whitespace is
/// ignored; what remains must be a decimal number (optional sign, optional
/// leading digits) immediately followed by `cm`, `mm` or `in`. The product is
/// taken in `f64` and rounds half to even, so `3.7mm` (10.5pt) gives 10.
pub fn parse_units(param: Option<&str>) -> Result<i32> {
    let Some(param) = param else {
        return Ok(0);
    };
    let text = param.trim();
    let format_error = || BookletError::Format(param.to_string());

    let (number, per_unit) = if let Some(number) = text.strip_suffix("cm") {
        (number, UNITS_PER_MM * 10.0)
    } else if let Some(number) = text.strip_suffix("mm") {
        (number, UNITS_PER_MM)
    } else if let Some(number) = text.strip_suffix("in") {
        (number, UNITS_PER_INCH)
    } else {
        return Err(format_error());
    };

    if !is_decimal(number) {
        return Err(format_error());
    }
    let value: f64 = number.parse().map_err(|_| format_error())?;

    Ok((value * per_unit).round_ties_even() as i32)
}

/// `[+-]?\d*\.?\d+`
fn is_decimal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => ("", unsigned),
    };
    !fraction.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
