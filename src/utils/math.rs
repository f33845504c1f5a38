//! Small numeric helpers shared by the service and its tests.

/// Return the sum of `a` and `b`.
///
/// Plain IEEE-754 addition: fractional operands are subject to binary
/// rounding, so `add(0.1, 0.2)` is only approximately `0.3`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}
