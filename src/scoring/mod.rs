// src/scoring/mod.rs

//! Score deltas and the end-of-session record.
//!
//! Scoring is a pure function of (difficulty, combo streak). The combo bonus
//! follows a logistic curve: streaks below two earn nothing, short streaks
//! barely matter, and sustained streaks ramp superlinearly toward a per-tier
//! ceiling. Harder tiers have a lower midpoint (the ramp starts earlier) and
//! a higher ceiling.

use crate::core::Difficulty;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Shared steepness of the logistic combo curve across all tiers.
const COMBO_STEEPNESS: f64 = 0.8;

/// Streak length below which no bonus is paid.
const MIN_COMBO_FOR_BONUS: u32 = 2;

/// One solve's worth of score, split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Fixed per-tier award.
    pub base_score: u64,
    /// Logistic streak bonus; zero below a streak of two.
    pub combo_bonus: u64,
    /// `base_score + combo_bonus`.
    pub total_gain: u64,
}

/// Stateless score calculator.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Computes the score delta for solving one puzzle at the given tier
    /// with the given streak. Pure; mutates nothing.
    pub fn calculate(difficulty: Difficulty, combo_count: u32) -> ScoreBreakdown {
        let base_score = difficulty.base_score();
        let combo_bonus = Self::combo_bonus(difficulty, combo_count);
        ScoreBreakdown {
            base_score,
            combo_bonus,
            total_gain: base_score + combo_bonus,
        }
    }

    /// The logistic streak bonus on its own.
    pub fn combo_bonus(difficulty: Difficulty, combo_count: u32) -> u64 {
        if combo_count < MIN_COMBO_FOR_BONUS {
            return 0;
        }
        let u = COMBO_STEEPNESS * (f64::from(combo_count) - difficulty.combo_midpoint());
        (difficulty.max_combo_bonus() * logistic(u)).round() as u64
    }
}

/// The standard logistic function 1/(1+e^{-u}).
fn logistic(u: f64) -> f64 {
    1.0 / (1.0 + (-u).exp())
}

/// Snapshot handed to the persistence collaborator when a session finishes.
/// Persistence answers with an optional top-5 rank; the core never touches
/// storage itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Random identity for the record.
    pub id: u64,
    /// Final session score.
    pub score: u64,
    /// Puzzles solved during the session.
    pub problems_solved: u32,
    /// Wall-clock moment the session finished.
    pub date: SystemTime,
    /// Tier the session was played at.
    pub difficulty: Difficulty,
}
