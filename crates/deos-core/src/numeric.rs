use crate::DeosError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DeosError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DeosError::NonFinite { what, value: v })
    }
}

/// Weighted sum Σ wᵢ·xᵢ over (weight, value) pairs.
///
/// The model's dot products run over a handful of fixed species, so a plain
/// fold is all that is needed.
pub fn weighted_sum(pairs: impl IntoIterator<Item = (Real, Real)>) -> Real {
    pairs.into_iter().map(|(w, x)| w * x).sum()
}
