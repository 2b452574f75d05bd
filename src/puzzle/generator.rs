// src/puzzle/generator.rs

use super::problem::{Problem, ProblemKey};
use crate::core::constants::{MAX_GENERATION_ATTEMPTS, RECENT_PROBLEM_WINDOW, STATE_EQ_TOLERANCE};
use crate::core::{BlochVector, Difficulty, GameError, QubitState};
use crate::gates::Gate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Produces solvable puzzles for a session.
///
/// The generator owns its randomness (an injected, seedable [`StdRng`]) and
/// the rolling window of recently issued problem keys, so a session never
/// serves the same puzzle twice in close succession and tests can replay a
/// deterministic puzzle stream from a seed.
pub struct ProblemGenerator {
    rng: StdRng,
    recent_keys: VecDeque<ProblemKey>,
}

impl ProblemGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            recent_keys: VecDeque::with_capacity(RECENT_PROBLEM_WINDOW),
        }
    }

    /// Creates a generator with a fixed seed for deterministic replay.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            recent_keys: VecDeque::with_capacity(RECENT_PROBLEM_WINDOW),
        }
    }

    /// The keys currently held by the anti-repeat window, oldest first.
    pub fn recent_keys(&self) -> Vec<ProblemKey> {
        self.recent_keys.iter().copied().collect()
    }

    /// Forgets the anti-repeat history. Called on session reset so a new
    /// session starts with the full puzzle space available.
    pub fn clear_history(&mut self) {
        self.recent_keys.clear();
    }

    /// Generates the next puzzle for the given tier.
    ///
    /// `number` is the 1-based position of the puzzle within the session and
    /// is recorded on the returned [`Problem`].
    ///
    /// # Returns
    /// * `Ok((problem, key))` - a solvable, non-trivial puzzle whose key does
    ///   not collide with any of the last `RECENT_PROBLEM_WINDOW` puzzles.
    /// * `Err(GameError::Generation)` - the bounded retry budget ran out.
    ///   Practically unreachable with six gates and short sequences; the
    ///   bound turns a pathological RNG stream into a detectable error
    ///   instead of an infinite loop.
    pub fn generate(
        &mut self,
        difficulty: Difficulty,
        number: u32,
    ) -> Result<(Problem, ProblemKey), GameError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let start_state = self.pick_start_state(difficulty);
            let solution = self.draw_solution(difficulty);
            let target_state = start_state.applying(&solution);

            // A target indistinguishable from the start would be a
            // zero-effort puzzle.
            if target_state.fidelity(&start_state) >= STATE_EQ_TOLERANCE {
                trace!(attempt, "rejected puzzle: target equals start");
                continue;
            }

            let key = ProblemKey::for_states(&start_state, &target_state);
            if self.recent_keys.contains(&key) {
                trace!(attempt, %key, "rejected puzzle: repeat within window");
                continue;
            }

            self.recent_keys.push_back(key);
            while self.recent_keys.len() > RECENT_PROBLEM_WINDOW {
                self.recent_keys.pop_front();
            }

            let problem = Problem {
                start_state,
                start_bloch: BlochVector::from_state(&start_state),
                target_state,
                target_bloch: BlochVector::from_state(&target_state),
                minimum_gates: solution.len(),
                reference_solution: solution,
                number,
            };
            debug!(%key, number, %difficulty, attempt, "generated puzzle");
            return Ok((problem, key));
        }

        Err(GameError::Generation {
            message: format!(
                "no acceptable puzzle after {} attempts (difficulty {})",
                MAX_GENERATION_ATTEMPTS, difficulty
            ),
        })
    }

    /// Start state per tier: always |0⟩ on easy, otherwise uniform over the
    /// tier's pool.
    fn pick_start_state(&mut self, difficulty: Difficulty) -> QubitState {
        if !difficulty.randomizes_start_state() {
            return QubitState::zero();
        }
        let pool = difficulty.start_state_pool();
        pool[self.rng.random_range(0..pool.len())]
    }

    /// Draws a random gate sequence of tier-dependent length, never placing
    /// the same gate twice in a row: for the involutory gates (X, Y, Z, H)
    /// a doubled gate cancels to identity and is never a meaningful step.
    /// Doubled S or T slip through the adjacency rule; that is a known
    /// generation-quality gap, not a correctness problem.
    fn draw_solution(&mut self, difficulty: Difficulty) -> Vec<Gate> {
        let length = self.rng.random_range(difficulty.solution_length_range());
        let mut solution: Vec<Gate> = Vec::with_capacity(length);
        for _ in 0..length {
            let gate = match solution.last() {
                Some(prev) => {
                    // Draw from the five gates that differ from the previous
                    // one, keeping the draw count bounded.
                    let candidates: Vec<Gate> =
                        Gate::ALL.iter().copied().filter(|g| g != prev).collect();
                    candidates[self.rng.random_range(0..candidates.len())]
                }
                None => Gate::ALL[self.rng.random_range(0..Gate::ALL.len())],
            };
            solution.push(gate);
        }
        solution
    }
}

impl Default for ProblemGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_puzzles_are_solvable_by_their_reference_solution() {
        let mut generator = ProblemGenerator::with_seed(11);
        for number in 1..=20 {
            let (problem, _) = generator
                .generate(Difficulty::Expert, number)
                .expect("generation");
            let reached = problem.start_state.applying(&problem.reference_solution);
            assert!(
                reached.fidelity(&problem.target_state) > 1.0 - 1e-9,
                "replaying the reference solution must reach the target ({})",
                problem
            );
            assert!(problem.minimum_gates <= Difficulty::Expert.circuit_capacity());
        }
    }

    #[test]
    fn no_back_to_back_gate_repeats() {
        let mut generator = ProblemGenerator::with_seed(23);
        for number in 1..=50 {
            let (problem, _) = generator
                .generate(Difficulty::Hard, number)
                .expect("generation");
            for pair in problem.reference_solution.windows(2) {
                assert_ne!(pair[0], pair[1], "adjacent repeat in {:?}", problem.reference_solution);
            }
        }
    }

    #[test]
    fn seeded_generators_replay_the_same_stream() {
        let mut a = ProblemGenerator::with_seed(5);
        let mut b = ProblemGenerator::with_seed(5);
        for number in 1..=10 {
            let (pa, ka) = a.generate(Difficulty::Hard, number).expect("generation");
            let (pb, kb) = b.generate(Difficulty::Hard, number).expect("generation");
            assert_eq!(ka, kb, "keys diverged at puzzle {}", number);
            assert_eq!(pa.reference_solution, pb.reference_solution);
        }
    }
}
