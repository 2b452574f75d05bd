// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;
pub mod bloch;
pub mod difficulty;
pub mod constants;

// Re-export public types for convenient access via `blochdash::core::TypeName`
pub use error::GameError;
pub use state::{Amplitude, QubitState};
pub use bloch::BlochVector;
pub use difficulty::Difficulty;
pub use constants::{NORM_TOLERANCE, STATE_EQ_TOLERANCE, SESSION_SECONDS};
