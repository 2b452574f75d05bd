//! Numeric tolerances and session constants shared across the crate.

/// Allowed deviation of |α|² + |β|² (or a Bloch vector's length) from 1.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Fidelity above which two states are treated as the same state.
/// Used by the generator to reject puzzles whose target equals the start.
pub const STATE_EQ_TOLERANCE: f64 = 0.99;

/// Length of a session in model seconds, counted down one tick at a time.
pub const SESSION_SECONDS: u32 = 60;

/// How many recent problem keys the generator refuses to repeat.
pub const RECENT_PROBLEM_WINDOW: usize = 4;

/// Retry budget for problem generation before giving up with an error.
/// With six gates and short sequences the budget is never exhausted in
/// practice; it exists so a pathological RNG stream terminates detectably.
pub const MAX_GENERATION_ATTEMPTS: usize = 64;

/// Miss limit bookkeeping carried by the engine. No transition consults it.
pub const MAX_MISSES: u32 = 3;
