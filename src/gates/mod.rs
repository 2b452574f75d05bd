// src/gates/mod.rs

//! The fixed six-gate catalog.
//!
//! Each gate is a 2×2 unitary defined once in matrix form, with an
//! equivalent axis/angle Bloch rotation that the presentation layer uses to
//! animate the sphere. The simulation itself only ever multiplies matrices
//! into states. Gates are stateless operators: pure, side-effect-free, and
//! closed under the enum - the game never constructs a gate from data.

use crate::core::state::{Amplitude, QubitState};
use num_traits::{One, Zero};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

/// One of the six gates in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Pauli-X: flips |0⟩ ↔ |1⟩. Rotation by π about the x axis.
    X,
    /// Pauli-Y: flip plus phase. Rotation by π about the y axis.
    Y,
    /// Pauli-Z: phase flip on |1⟩. Rotation by π about the z axis.
    Z,
    /// Hadamard: basis change between the z and x axes.
    H,
    /// Quarter-turn phase gate, |1⟩ → i|1⟩.
    S,
    /// Eighth-turn phase gate, |1⟩ → e^{iπ/4}|1⟩.
    T,
}

impl Gate {
    /// The full palette, in display order.
    pub const ALL: [Gate; 6] = [Gate::X, Gate::Y, Gate::Z, Gate::H, Gate::S, Gate::T];

    /// The gate's 2×2 unitary matrix, row-major.
    pub fn matrix(&self) -> [[Amplitude; 2]; 2] {
        let i = Amplitude::i();
        let h = Amplitude::new(FRAC_1_SQRT_2, 0.0);
        // e^(i*PI/4) = (1+i)/sqrt(2)
        let exp_i_pi_4 = Amplitude::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);

        match self {
            Gate::X => [
                [Amplitude::zero(), Amplitude::one()],
                [Amplitude::one(), Amplitude::zero()],
            ],
            Gate::Y => [
                [Amplitude::zero(), -i],
                [i, Amplitude::zero()],
            ],
            Gate::Z => [
                [Amplitude::one(), Amplitude::zero()],
                [Amplitude::zero(), Amplitude::new(-1.0, 0.0)],
            ],
            Gate::H => [[h, h], [h, -h]],
            Gate::S => [
                [Amplitude::one(), Amplitude::zero()],
                [Amplitude::zero(), i],
            ],
            Gate::T => [
                [Amplitude::one(), Amplitude::zero()],
                [Amplitude::zero(), exp_i_pi_4],
            ],
        }
    }

    /// Unit rotation axis of the equivalent Bloch sphere rotation.
    pub fn axis(&self) -> [f64; 3] {
        match self {
            Gate::X => [1.0, 0.0, 0.0],
            Gate::Y => [0.0, 1.0, 0.0],
            Gate::Z | Gate::S | Gate::T => [0.0, 0.0, 1.0],
            Gate::H => [FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2],
        }
    }

    /// Rotation angle (radians) about `axis`.
    pub fn angle(&self) -> f64 {
        match self {
            Gate::X | Gate::Y | Gate::Z | Gate::H => PI,
            Gate::S => FRAC_PI_2,
            Gate::T => FRAC_PI_4,
        }
    }

    /// Applies the gate to a state, producing a fresh state.
    ///
    /// The product is re-normalized by the `QubitState` constructor; since
    /// the matrices are unitary this only mops up floating-point drift.
    pub fn apply(&self, state: &QubitState) -> QubitState {
        let m = self.matrix();
        let alpha = m[0][0] * state.alpha() + m[0][1] * state.beta();
        let beta = m[1][0] * state.alpha() + m[1][1] * state.beta();
        QubitState::new(alpha, beta)
    }

    /// Single-character palette symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::S => "S",
            Gate::T => "T",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn x_flips_the_poles() {
        let flipped = Gate::X.apply(&QubitState::zero());
        assert!(
            flipped.fidelity(&QubitState::one()) > 1.0 - TEST_TOLERANCE,
            "X|0⟩ should be |1⟩, got {}",
            flipped
        );
    }

    #[test]
    fn h_builds_superposition() {
        let plus = Gate::H.apply(&QubitState::zero());
        assert!(
            plus.fidelity(&QubitState::plus()) > 1.0 - TEST_TOLERANCE,
            "H|0⟩ should be |+⟩, got {}",
            plus
        );
    }

    #[test]
    fn s_sends_plus_to_plus_i() {
        let rotated = Gate::S.apply(&QubitState::plus());
        assert!(
            rotated.fidelity(&QubitState::plus_i()) > 1.0 - TEST_TOLERANCE,
            "S|+⟩ should be |i⟩, got {}",
            rotated
        );
    }

    #[test]
    fn rotation_axes_are_unit_length() {
        for gate in Gate::ALL {
            let [x, y, z] = gate.axis();
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < TEST_TOLERANCE, "axis of {} not unit", gate);
        }
    }
}
