//! Diagnostic number formatting.

use super::{Point3, Vector3};

/// Formats `value` with at most `digits` significant digits.
///
/// Trailing zeros are dropped. Very large or very small magnitudes switch
/// to scientific notation.
#[must_use]
pub fn significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".into();
    }
    let digits = digits.max(1);
    let precision = digits - 1;

    // Round first so that e.g. 99999.7 picks the exponent of 1.0000E5.
    let rounded: f64 = format!("{value:.precision$e}").parse().unwrap_or(value);
    #[allow(clippy::cast_possible_truncation)]
    let exponent = rounded.abs().log10().floor() as i32;

    let digits_i = i32::try_from(digits).unwrap_or(i32::MAX);
    if exponent < -5 || exponent >= digits_i {
        let s = format!("{value:.precision$E}");
        return match s.split_once('E') {
            Some((mantissa, exp)) => format!("{}E{exp}", trim_zeros(mantissa)),
            None => s,
        };
    }

    let decimals = usize::try_from(digits_i - 1 - exponent).unwrap_or(0);
    trim_zeros(&format!("{value:.decimals$}")).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats a point as `x y z` with five significant digits each.
#[must_use]
pub fn point(p: &Point3) -> String {
    format!("{:>12} {:>12} {:>12}", significant(p.x, 5), significant(p.y, 5), significant(p.z, 5))
}

/// Formats a vector as `x y z` with five significant digits each.
#[must_use]
pub fn vector(v: &Vector3) -> String {
    format!("{:>12} {:>12} {:>12}", significant(v.x, 5), significant(v.y, 5), significant(v.z, 5))
}
