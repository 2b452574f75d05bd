// src/core/difficulty.rs

//! Difficulty tiers and their table-driven configuration.
//!
//! A tier bundles everything the session varies: which start states the
//! generator may pick, how many gate slots the circuit holds, how long the
//! reference solutions are, and the scoring constants of the combo curve.

use crate::core::state::QubitState;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::ops::RangeInclusive;

/// The three selectable difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Start state always |0⟩, short solutions, gentle scoring.
    Easy,
    /// Random cardinal start state, longer solutions, steeper scoring.
    Hard,
    /// Random cardinal or derived start state, longest solutions, six slots.
    Expert,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Hard, Difficulty::Expert];

    /// Number of gate slots in the session circuit.
    pub fn circuit_capacity(&self) -> usize {
        match self {
            Difficulty::Easy | Difficulty::Hard => 4,
            Difficulty::Expert => 6,
        }
    }

    /// Length range of generated reference solutions. Always within
    /// `circuit_capacity`, so every puzzle is solvable inside the circuit.
    pub fn solution_length_range(&self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 2..=3,
            Difficulty::Hard => 3..=4,
            Difficulty::Expert => 3..=5,
        }
    }

    /// Whether the generator draws a random start state instead of |0⟩.
    pub fn randomizes_start_state(&self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    /// The pool of start states the generator draws from.
    ///
    /// Expert adds two equator states at azimuth π/4 and 5π/4 - the
    /// directions a T gate rotates |+⟩ and |−⟩ onto - so expert puzzles can
    /// begin off the cardinal axes.
    pub fn start_state_pool(&self) -> Vec<QubitState> {
        match self {
            Difficulty::Easy => vec![QubitState::zero()],
            Difficulty::Hard => QubitState::cardinals().to_vec(),
            Difficulty::Expert => {
                let mut pool = QubitState::cardinals().to_vec();
                pool.push(QubitState::from_bloch_angles(FRAC_PI_2, FRAC_PI_4));
                pool.push(QubitState::from_bloch_angles(FRAC_PI_2, PI + FRAC_PI_4));
                pool
            }
        }
    }

    /// Fixed score awarded per solved puzzle, before any combo bonus.
    pub fn base_score(&self) -> u64 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Hard => 200,
            Difficulty::Expert => 300,
        }
    }

    /// Ceiling of the logistic combo bonus.
    pub fn max_combo_bonus(&self) -> f64 {
        match self {
            Difficulty::Easy => 50.0,
            Difficulty::Hard => 120.0,
            Difficulty::Expert => 200.0,
        }
    }

    /// Streak length at which the combo bonus reaches half its ceiling.
    /// Harder tiers ramp up earlier.
    pub fn combo_midpoint(&self) -> f64 {
        match self {
            Difficulty::Easy => 6.0,
            Difficulty::Hard => 5.0,
            Difficulty::Expert => 4.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Expert => write!(f, "expert"),
        }
    }
}
