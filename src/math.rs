//! Shared numerical primitives anchored on `num-complex`.

use num_complex::Complex;

use crate::errors::{DomainError, Result};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances.
pub type CScalar = Complex<Scalar>;

/// Complex zero, the impedance of an empty circuit.
pub const ZERO: CScalar = Complex::new(0.0, 0.0);
/// Complex one.
pub const ONE: CScalar = Complex::new(1.0, 0.0);

/// Modulus of an impedance in ohms.
#[inline]
#[must_use]
pub fn magnitude(z: CScalar) -> Scalar {
    z.norm()
}

/// Argument of an impedance in radians, in (-π, π].
#[inline]
#[must_use]
pub fn phase(z: CScalar) -> Scalar {
    z.arg()
}

/// Returns `1 / z`, or `None` when `z` is exactly zero.
///
/// Uses the scaled inverse so that `|z|²` cannot overflow or underflow.
#[must_use]
pub fn checked_reciprocal(z: CScalar) -> Option<CScalar> {
    if z == ZERO {
        None
    } else {
        Some(z.finv())
    }
}

/// True when both parts of `z` are finite.
#[inline]
#[must_use]
pub fn is_finite(z: CScalar) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

/// Checks that `hz` is a usable excitation frequency (finite, non-negative).
pub fn validate_frequency(hz: Scalar) -> Result<Scalar> {
    if hz.is_finite() && hz >= 0.0 {
        Ok(hz)
    } else {
        Err(DomainError::InvalidFrequency(hz))
    }
}
