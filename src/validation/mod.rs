// src/validation/mod.rs

//! Invariant checks for states, Bloch vectors, and the gate catalog.
//!
//! The constructors already enforce these invariants; the checks exist so
//! tests and debug paths can assert them explicitly instead of re-deriving
//! the arithmetic.

use crate::core::constants::NORM_TOLERANCE;
use crate::core::state::Amplitude;
use crate::core::{BlochVector, GameError, QubitState};
use crate::gates::Gate;
use num_traits::{One, Zero};

/// Checks that |α|² + |β|² ≈ 1.
///
/// # Arguments
/// * `state` - The state to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to `NORM_TOLERANCE`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(GameError::Validation)` otherwise.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), GameError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.alpha().norm_sqr() + state.beta().norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(GameError::Validation {
            message: format!(
                "state normalization failed: |α|²+|β|² = {} (deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that a Bloch vector has unit length.
pub fn check_unit_bloch(vector: &BlochVector, tolerance: Option<f64>) -> Result<(), GameError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let len = (vector.x() * vector.x() + vector.y() * vector.y() + vector.z() * vector.z()).sqrt();
    if (len - 1.0).abs() > effective_tolerance {
        Err(GameError::Validation {
            message: format!(
                "Bloch vector {} has length {} (deviation > {})",
                vector, len, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that a gate's matrix is unitary: U†U ≈ I.
///
/// The catalog is fixed, so this can only fail if a matrix definition is
/// edited incorrectly; the test suite runs it over the whole palette.
pub fn check_unitarity(gate: Gate, tolerance: Option<f64>) -> Result<(), GameError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let m = gate.matrix();
    // U†U, with U† the conjugate transpose.
    let identity = [
        [Amplitude::one(), Amplitude::zero()],
        [Amplitude::zero(), Amplitude::one()],
    ];
    for row in 0..2 {
        for col in 0..2 {
            let mut entry = Amplitude::zero();
            for k in 0..2 {
                entry += m[k][row].conj() * m[k][col];
            }
            if (entry - identity[row][col]).norm() > effective_tolerance {
                return Err(GameError::Validation {
                    message: format!(
                        "gate {} is not unitary: (U†U)[{}][{}] = {}",
                        gate, row, col, entry
                    ),
                });
            }
        }
    }
    Ok(())
}
