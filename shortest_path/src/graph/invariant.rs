//! Weight checks applied to every matrix cell during validation.

use super::matrix::Weight;

/// Invariant trait for graph algorithm checks
pub trait Invariant<T> {
    fn check(&self, value: &T) -> bool;
}

/// Rejects weights strictly below zero. NaN passes here; `Finite` rejects it.
pub struct NonNegative;

impl Invariant<Weight> for NonNegative {
    fn check(&self, value: &Weight) -> bool {
        *value >= 0.0 || value.is_nan()
    }
}

/// Rejects NaN and infinities.
pub struct Finite;

impl Invariant<Weight> for Finite {
    fn check(&self, value: &Weight) -> bool {
        value.is_finite()
    }
}
