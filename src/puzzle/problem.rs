// src/puzzle/problem.rs

use crate::core::{BlochVector, QubitState};
use crate::gates::Gate;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a generated puzzle, used by the anti-repeat window.
///
/// Derived by hashing the quantized start and target Bloch coordinates, so
/// two puzzles that look the same on the sphere collide even when their
/// reference solutions differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemKey(pub u64);

impl ProblemKey {
    /// Derives the key for a (start, target) pair.
    pub fn for_states(start: &QubitState, target: &QubitState) -> Self {
        // Quantize to 1e-3 so floating-point jitter cannot split identical
        // puzzles into distinct keys.
        fn quantized(v: f64) -> i64 {
            (v * 1000.0).round() as i64
        }

        let start_bloch = BlochVector::from_state(start);
        let target_bloch = BlochVector::from_state(target);
        let mut hasher = DefaultHasher::new();
        for coord in [
            start_bloch.x(),
            start_bloch.y(),
            start_bloch.z(),
            target_bloch.x(),
            target_bloch.y(),
            target_bloch.z(),
        ] {
            quantized(coord).hash(&mut hasher);
        }
        ProblemKey(hasher.finish())
    }
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Problem({:016x})", self.0)
    }
}

/// One generated puzzle. Immutable once generated; the session replaces it
/// on every solve or reset.
#[derive(Debug, Clone)]
pub struct Problem {
    /// State the circuit is applied to.
    pub start_state: QubitState,
    /// Sphere position of the start state, precomputed for the display.
    pub start_bloch: BlochVector,
    /// State the player must reach.
    pub target_state: QubitState,
    /// Sphere position of the target state.
    pub target_bloch: BlochVector,
    /// Length of the reference solution; the puzzle is solvable in this
    /// many gates (shorter solutions may exist).
    pub minimum_gates: usize,
    /// The gate sequence the target was built from.
    pub reference_solution: Vec<Gate>,
    /// 1-based position of the puzzle within its session.
    pub number: u32,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "puzzle #{}: {} -> {} (min {} gates)",
            self.number, self.start_bloch, self.target_bloch, self.minimum_gates
        )
    }
}
