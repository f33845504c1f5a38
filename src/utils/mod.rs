/// Arithmetic helpers.
pub mod math;
