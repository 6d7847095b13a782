/// Converts an `i64` to the nearest `f64`.
///
/// Values beyond `2^53` in magnitude round to the nearest representable real.
///
/// ## Example
/// ```
/// use rdcalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Divides two integers, producing a real.
///
/// The quotient and remainder are split before converting, so an exact
/// quotient is never rounded twice: `9007199254740993 / 3` is exactly
/// `3002399751580331.0` even though the dividend itself has no exact `f64`.
///
/// Returns `None` when `divisor` is zero.
///
/// ## Example
/// ```
/// use rdcalc::util::num::div_i64_to_f64;
///
/// assert_eq!(div_i64_to_f64(7, 2), Some(3.5));
/// assert_eq!(div_i64_to_f64(-7, 2), Some(-3.5));
/// assert_eq!(div_i64_to_f64(9_007_199_254_740_993, 3), Some(3_002_399_751_580_331.0));
/// assert_eq!(div_i64_to_f64(1, 0), None);
/// ```
#[must_use]
pub fn div_i64_to_f64(dividend: i64, divisor: i64) -> Option<f64> {
    if divisor == 0 {
        return None;
    }

    // Only `i64::MIN / -1` fails here.
    match (dividend.checked_div(divisor), dividend.checked_rem(divisor)) {
        (Some(quotient), Some(remainder)) => {
            Some(i64_to_f64(quotient) + i64_to_f64(remainder) / i64_to_f64(divisor))
        },
        _ => Some(i64_to_f64(dividend) / i64_to_f64(divisor)),
    }
}
