// src/judge/mod.rs

//! Fidelity judging of a player's circuit against the puzzle target.

use crate::circuit::Circuit;
use crate::core::QubitState;

/// Minimum fidelity at which a circuit output counts as correct.
///
/// Deliberately a hair below 1 so that floating round-off of an exactly
/// right gate sequence still passes, while any genuinely different state
/// fails. There is no partial credit.
pub const FIDELITY_THRESHOLD: f64 = 1.0 - 1e-6;

/// Advisory "nearly there" fidelity, used only for feedback text.
/// Never consulted for pass/fail or scoring.
pub const CLOSE_THRESHOLD: f64 = 0.95;

/// Outcome of judging one attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Judgment {
    /// Whether the attempt passes the exact threshold.
    pub is_correct: bool,
    /// Raw fidelity between the produced state and the target, in [0, 1].
    pub fidelity: f64,
}

impl Judgment {
    /// Whether the attempt is close enough to warrant encouraging feedback.
    /// True for every correct attempt as well.
    pub fn is_close(&self) -> bool {
        self.fidelity >= CLOSE_THRESHOLD
    }
}

/// Judges a circuit: folds it onto `start` and compares the result against
/// `target` by fidelity. Pure; neither the circuit nor the states change.
pub fn judge(circuit: &Circuit, start: &QubitState, target: &QubitState) -> Judgment {
    let result = circuit.apply(start);
    let fidelity = result.fidelity(target);
    Judgment {
        is_correct: fidelity >= FIDELITY_THRESHOLD,
        fidelity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::Gate;

    #[test]
    fn hadamard_circuit_reaches_plus() {
        let mut circuit = Circuit::new(4);
        circuit.add_gate(Gate::H);
        let judgment = judge(&circuit, &QubitState::zero(), &QubitState::plus());
        assert!(judgment.is_correct, "fidelity was {}", judgment.fidelity);
        assert!(judgment.is_close());
    }

    #[test]
    fn orthogonal_result_fails_and_is_not_close() {
        let circuit = Circuit::new(4); // empty: output stays |0⟩
        let judgment = judge(&circuit, &QubitState::zero(), &QubitState::one());
        assert!(!judgment.is_correct);
        assert!(!judgment.is_close());
        assert!(judgment.fidelity < 1e-9);
    }

    #[test]
    fn close_but_wrong_is_advisory_only() {
        // |0⟩ against a state tilted slightly off the pole: fidelity is high
        // but below the exact threshold, so the advisory flag fires while the
        // pass gate stays shut.
        let tilted = QubitState::from_bloch_angles(0.3, 0.0);
        let circuit = Circuit::new(4);
        let judgment = judge(&circuit, &QubitState::zero(), &tilted);
        assert!(!judgment.is_correct);
        assert!(judgment.is_close(), "fidelity was {}", judgment.fidelity);
    }
}
