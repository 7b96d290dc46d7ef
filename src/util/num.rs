/// Converts a floating-point operand to a signed 64-bit integer, truncating
/// toward zero.
///
/// Out-of-range values saturate at `i64::MIN`/`i64::MAX` and `NaN` becomes
/// `0`, following the semantics of an `as` cast.
///
/// ## Example
/// ```
/// use reckon::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9), 7);
/// assert_eq!(f64_to_i64_truncated(-7.9), -7);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

/// Converts a signed 64-bit integer result back to `f64`.
///
/// Magnitudes above `2^53` round to the nearest representable value.
///
/// ## Example
/// ```
/// use reckon::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an unsigned literal value to `f64`.
///
/// ## Example
/// ```
/// use reckon::util::num::u64_to_f64;
///
/// assert_eq!(u64_to_f64(31), 31.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64(value: u64) -> f64 {
    value as f64
}
