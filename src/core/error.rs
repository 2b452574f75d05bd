//! Error handling logic

use std::fmt;

/// Error type for the puzzle core.
///
/// The core is designed around silent no-ops rather than failures: adding a
/// gate to a full circuit, removing at a bad index, or calling a session
/// method in the wrong phase all do nothing. The one genuinely fallible
/// operation is problem generation, whose internal retry loop is bounded so
/// that a pathological RNG stream surfaces as an error instead of a hang.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum GameError {
    /// Problem generation exhausted its retry budget without producing a
    /// puzzle that satisfies the non-trivial-target and anti-repeat rules.
    Generation {
        /// Generation failure message
        message: String,
    },

    /// A numeric invariant check failed (normalization, unit length,
    /// unitarity). Raised only by the `validation` module.
    Validation {
        /// Validation failure message
        message: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Generation { message } => write!(f, "Generation Failure: {}", message),
            GameError::Validation { message } => write!(f, "Validation Failure: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for GameError {}
