// src/engine/mod.rs

//! The timed session state machine.
//!
//! `GameEngine` owns the live circuit, the current problem, and all session
//! counters, and sequences generation, judging, and scoring behind a small
//! phase machine: `Ready → Playing ⇄ Paused → Finished`, with `Finished`
//! terminal until `reset`. Calls issued in the wrong phase are silent no-ops;
//! the machine is defensive by construction rather than error-raising.
//!
//! Time is modeled as explicit one-second [`GameEngine::tick`] calls so the
//! engine stays deterministic and single-threaded. The [`Countdown`] driver
//! turns wall-clock seconds into channel messages for an embedder to drain;
//! it never touches engine state itself.

mod countdown;

pub use countdown::Countdown;

use crate::circuit::Circuit;
use crate::core::constants::SESSION_SECONDS;
use crate::core::{BlochVector, Difficulty, GameError, QubitState};
use crate::gates::Gate;
use crate::judge::{self, Judgment};
use crate::puzzle::{Problem, ProblemGenerator};
use crate::scoring::{ScoreCalculator, ScoreEntry};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;
use tracing::debug;

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// No session running; `start` is accepted.
    Ready,
    /// Countdown live, mutations accepted.
    Playing,
    /// Countdown suspended, circuit and score frozen.
    Paused,
    /// Countdown hit zero. Terminal; only `reset` leaves it.
    Finished,
}

/// What `run_circuit` tells the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// The attempt matched the target.
    pub is_correct: bool,
    /// The session has ended (the attempt did not cause this; misses never
    /// end a session, only the clock does).
    pub is_game_over: bool,
}

/// The session engine. Owned and driven by exactly one logical context.
pub struct GameEngine {
    phase: GamePhase,
    difficulty: Difficulty,
    generator: ProblemGenerator,
    circuit: Circuit,
    problem: Option<Problem>,
    current_state: QubitState,
    score: u64,
    combo_count: u32,
    last_combo_bonus: u64,
    problems_solved: u32,
    /// Wrong-answer bookkeeping. Never consulted by any transition; the
    /// counter is kept for compatibility with the session record layout.
    miss_count: u32,
    remaining_time: u32,
    did_solve_last_problem: bool,
    final_entry: Option<ScoreEntry>,
}

impl GameEngine {
    /// Creates an idle engine with OS-seeded puzzle generation.
    pub fn new() -> Self {
        Self::with_generator(ProblemGenerator::new())
    }

    /// Creates an idle engine whose puzzle stream is reproducible from
    /// `seed`. Intended for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(ProblemGenerator::with_seed(seed))
    }

    fn with_generator(generator: ProblemGenerator) -> Self {
        Self {
            phase: GamePhase::Ready,
            difficulty: Difficulty::Easy,
            generator,
            circuit: Circuit::new(0),
            problem: None,
            current_state: QubitState::zero(),
            score: 0,
            combo_count: 0,
            last_combo_bonus: 0,
            problems_solved: 0,
            miss_count: 0,
            remaining_time: 0,
            did_solve_last_problem: false,
            final_entry: None,
        }
    }

    // --- Transitions ---

    /// Starts a session at the given tier. Accepted only from `Ready`;
    /// in any other phase the call is ignored.
    pub fn start(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        if self.phase != GamePhase::Ready {
            return Ok(());
        }
        self.difficulty = difficulty;
        self.score = 0;
        self.combo_count = 0;
        self.last_combo_bonus = 0;
        self.problems_solved = 0;
        self.miss_count = 0;
        self.did_solve_last_problem = false;
        self.final_entry = None;
        self.circuit = Circuit::new(difficulty.circuit_capacity());
        self.remaining_time = SESSION_SECONDS;
        self.load_next_problem(1)?;
        self.phase = GamePhase::Playing;
        debug!(%difficulty, "session started");
        Ok(())
    }

    /// Suspends the countdown. Circuit and score are untouched.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            debug!("session paused");
        }
    }

    /// Resumes a paused countdown.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            debug!("session resumed");
        }
    }

    /// Returns the engine to `Ready` from any phase, discarding session
    /// state. The owner must cancel any live [`Countdown`] first so a stale
    /// tick cannot arrive between reset and the next start; a tick that does
    /// arrive anyway is ignored by the phase guard in [`GameEngine::tick`].
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.problem = None;
        self.circuit = Circuit::new(0);
        self.current_state = QubitState::zero();
        self.score = 0;
        self.combo_count = 0;
        self.last_combo_bonus = 0;
        self.problems_solved = 0;
        self.miss_count = 0;
        self.remaining_time = 0;
        self.did_solve_last_problem = false;
        self.final_entry = None;
        self.generator.clear_history();
        debug!("session reset");
    }

    /// Advances the session clock by one model second. Only meaningful while
    /// `Playing`; every other phase ignores the tick, which is what makes a
    /// stale countdown message harmless.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        // The solve flash is presentation timing: it survives until the next
        // tick, then clears on its own.
        self.did_solve_last_problem = false;
        self.remaining_time = self.remaining_time.saturating_sub(1);
        if self.remaining_time == 0 {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = GamePhase::Finished;
        let date = SystemTime::now();
        self.final_entry = Some(ScoreEntry {
            id: session_record_id(date, self.score, self.problems_solved),
            score: self.score,
            problems_solved: self.problems_solved,
            date,
            difficulty: self.difficulty,
        });
        debug!(score = self.score, solved = self.problems_solved, "session finished");
    }

    // --- Circuit mutations (Playing only) ---

    /// Appends a gate to the live circuit. Returns `false` when the engine
    /// is not playing or the circuit is full.
    pub fn add_gate(&mut self, gate: Gate) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let added = self.circuit.add_gate(gate);
        if added {
            self.refresh_current_state();
        }
        added
    }

    /// Removes the gate at `index`; ignored when not playing or out of range.
    pub fn remove_gate(&mut self, index: usize) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.circuit.remove_gate(index);
        self.refresh_current_state();
    }

    /// Removes the most recently placed gate; ignored when not playing.
    pub fn remove_last_gate(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.circuit.remove_last_gate();
        self.refresh_current_state();
    }

    /// Empties the live circuit; ignored when not playing.
    pub fn clear_circuit(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.circuit.clear();
        self.refresh_current_state();
    }

    fn refresh_current_state(&mut self) {
        if let Some(problem) = &self.problem {
            self.current_state = self.circuit.apply(&problem.start_state);
        }
    }

    // --- Judging ---

    /// Judges the live circuit without changing anything. `None` before the
    /// first problem is loaded.
    pub fn check_current_state(&self) -> Option<Judgment> {
        self.problem
            .as_ref()
            .map(|p| judge::judge(&self.circuit, &p.start_state, &p.target_state))
    }

    /// Runs the live circuit against the current problem and applies the
    /// consequences: scoring and a fresh problem on success, a combo reset
    /// on failure. Outside `Playing` the call judges nothing and reports
    /// only whether the session is over.
    pub fn run_circuit(&mut self) -> Result<RunOutcome, GameError> {
        if self.phase != GamePhase::Playing {
            return Ok(RunOutcome {
                is_correct: false,
                is_game_over: self.phase == GamePhase::Finished,
            });
        }
        let Some(judgment) = self.check_current_state() else {
            return Ok(RunOutcome { is_correct: false, is_game_over: false });
        };
        if judgment.is_correct {
            self.handle_correct_answer()?;
        } else {
            self.handle_wrong_answer();
        }
        Ok(RunOutcome {
            is_correct: judgment.is_correct,
            is_game_over: self.phase == GamePhase::Finished,
        })
    }

    fn handle_correct_answer(&mut self) -> Result<(), GameError> {
        self.combo_count += 1;
        self.problems_solved += 1;
        let breakdown = ScoreCalculator::calculate(self.difficulty, self.combo_count);
        self.score += breakdown.total_gain;
        self.last_combo_bonus = breakdown.combo_bonus;
        self.circuit.clear();
        self.did_solve_last_problem = true;
        self.load_next_problem(self.problems_solved + 1)?;
        debug!(
            combo = self.combo_count,
            gain = breakdown.total_gain,
            score = self.score,
            "puzzle solved"
        );
        Ok(())
    }

    fn handle_wrong_answer(&mut self) {
        self.combo_count = 0;
        self.last_combo_bonus = 0;
        self.miss_count += 1;
        debug!(misses = self.miss_count, "wrong answer, combo reset");
    }

    fn load_next_problem(&mut self, number: u32) -> Result<(), GameError> {
        let (problem, _) = self.generator.generate(self.difficulty, number)?;
        self.current_state = self.circuit.apply(&problem.start_state);
        self.problem = Some(problem);
        Ok(())
    }

    // --- Read accessors for the display layer ---

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Tier the session was started at.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Total session score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Current streak of consecutive correct answers.
    pub fn combo_count(&self) -> u32 {
        self.combo_count
    }

    /// Combo bonus paid for the most recent solve.
    pub fn last_combo_bonus(&self) -> u64 {
        self.last_combo_bonus
    }

    /// Puzzles solved this session.
    pub fn problems_solved(&self) -> u32 {
        self.problems_solved
    }

    /// Wrong answers this session (bookkeeping only).
    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    /// Model seconds left on the clock.
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// State the live circuit currently produces from the problem start.
    pub fn current_state(&self) -> QubitState {
        self.current_state
    }

    /// Sphere position of the current state.
    pub fn current_bloch(&self) -> BlochVector {
        BlochVector::from_state(&self.current_state)
    }

    /// Sphere position of the target, if a problem is loaded.
    pub fn target_bloch(&self) -> Option<BlochVector> {
        self.problem.as_ref().map(|p| p.target_bloch)
    }

    /// The live circuit, for slot display.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The active problem, if any.
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    /// Transient flag for the solve animation; clears on the next tick.
    pub fn did_solve_last_problem(&self) -> bool {
        self.did_solve_last_problem
    }

    /// The finished session's record, once the clock has run out.
    pub fn score_entry(&self) -> Option<&ScoreEntry> {
        self.final_entry.as_ref()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity for a session record, derived from the finish time and totals.
fn session_record_id(date: SystemTime, score: u64, problems_solved: u32) -> u64 {
    let mut hasher = DefaultHasher::new();
    if let Ok(elapsed) = date.duration_since(SystemTime::UNIX_EPOCH) {
        elapsed.as_nanos().hash(&mut hasher);
    }
    score.hash(&mut hasher);
    problems_solved.hash(&mut hasher);
    hasher.finish()
}
