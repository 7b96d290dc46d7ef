/// Numeric conversion helpers.
///
/// This module centralizes the casts between `f64` and the 64-bit integer
/// forms used by integer literals, the remainder operator and the bitwise
/// operators, so the lossy conversions are spelled out in one place.
pub mod num;
