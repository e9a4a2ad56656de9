//! Validation of caller-supplied tolerances.
//!
//! Every proximity predicate in this crate takes an explicit tolerance.
//! No hidden epsilons are used.

use crate::error::{GeometryError, Result};
use num_traits::Float;

/// Checks that `tolerance` is finite and non-negative.
pub(crate) fn check_tolerance<F: Float>(tolerance: F) -> Result<()> {
    if tolerance.is_finite() && tolerance >= F::zero() {
        Ok(())
    } else {
        Err(GeometryError::InvalidArgument(
            "tolerance must be finite and non-negative".to_string(),
        ))
    }
}
