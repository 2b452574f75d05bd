// src/core/state.rs

use crate::core::constants::NORM_TOLERANCE;
use crate::gates::Gate;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Complex amplitude of a basis state.
pub type Amplitude = Complex<f64>;

/// A pure single-qubit state α|0⟩ + β|1⟩.
///
/// The constructor owns the normalization invariant |α|² + |β|² = 1: any
/// non-zero input is scaled to unit length, and a degenerate zero-length
/// input falls back to |0⟩ instead of producing NaNs. States are immutable
/// values; applying a gate produces a fresh state.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point amplitudes
pub struct QubitState {
    alpha: Amplitude,
    beta: Amplitude,
}

impl QubitState {
    /// Creates a normalized state from raw amplitudes.
    ///
    /// A zero-length input (both amplitudes zero, or numerically negligible)
    /// yields |0⟩ rather than an error, so floating-point edge cases can
    /// never crash a session.
    pub fn new(alpha: Amplitude, beta: Amplitude) -> Self {
        let norm_sq = alpha.norm_sqr() + beta.norm_sqr();
        if norm_sq > f64::EPSILON {
            let norm = norm_sq.sqrt();
            Self {
                alpha: alpha / norm,
                beta: beta / norm,
            }
        } else {
            Self {
                alpha: Amplitude::one(),
                beta: Amplitude::zero(),
            }
        }
    }

    /// Constructs the state cos(θ/2)|0⟩ + e^{iφ}·sin(θ/2)|1⟩ from Bloch
    /// sphere angles. Used to precompute the derived equator states offered
    /// as start states on the hardest tier.
    pub fn from_bloch_angles(theta: f64, phi: f64) -> Self {
        let half = theta / 2.0;
        let alpha = Amplitude::new(half.cos(), 0.0);
        let beta = Amplitude::new(half.sin() * phi.cos(), half.sin() * phi.sin());
        Self::new(alpha, beta)
    }

    /// |0⟩ - the north pole of the Bloch sphere.
    pub fn zero() -> Self {
        Self::new(Amplitude::one(), Amplitude::zero())
    }

    /// |1⟩ - the south pole.
    pub fn one() -> Self {
        Self::new(Amplitude::zero(), Amplitude::one())
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2.
    pub fn plus() -> Self {
        Self::new(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
        )
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2.
    pub fn minus() -> Self {
        Self::new(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(-FRAC_1_SQRT_2, 0.0),
        )
    }

    /// |i⟩ = (|0⟩ + i|1⟩)/√2.
    pub fn plus_i() -> Self {
        Self::new(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(0.0, FRAC_1_SQRT_2),
        )
    }

    /// |−i⟩ = (|0⟩ − i|1⟩)/√2.
    pub fn minus_i() -> Self {
        Self::new(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(0.0, -FRAC_1_SQRT_2),
        )
    }

    /// The six cardinal states, in the axis order |0⟩,|1⟩,|+⟩,|−⟩,|i⟩,|−i⟩.
    pub fn cardinals() -> [Self; 6] {
        [
            Self::zero(),
            Self::one(),
            Self::plus(),
            Self::minus(),
            Self::plus_i(),
            Self::minus_i(),
        ]
    }

    /// Amplitude of |0⟩.
    pub fn alpha(&self) -> Amplitude {
        self.alpha
    }

    /// Amplitude of |1⟩.
    pub fn beta(&self) -> Amplitude {
        self.beta
    }

    /// Born-rule probability of measuring 0.
    pub fn probability_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Born-rule probability of measuring 1.
    pub fn probability_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Inner product ⟨self|other⟩ = ᾱ·α′ + β̄·β′.
    /// The receiver's amplitudes are the conjugated side.
    pub fn inner_product(&self, other: &QubitState) -> Amplitude {
        self.alpha.conj() * other.alpha + self.beta.conj() * other.beta
    }

    /// Fidelity |⟨self|other⟩|² in [0, 1]; 1 means the same state (up to
    /// global phase), 0 means orthogonal. Symmetric in its arguments.
    pub fn fidelity(&self, other: &QubitState) -> f64 {
        self.inner_product(other).norm_sqr()
    }

    /// Left-folds a gate sequence onto the state; the first gate in the
    /// slice acts first.
    pub fn applying(&self, gates: &[Gate]) -> QubitState {
        gates.iter().fold(*self, |state, gate| gate.apply(&state))
    }

    /// Whether the normalization invariant holds within `NORM_TOLERANCE`.
    /// True for every state produced by the constructor; exposed for
    /// validation and tests.
    pub fn is_normalized(&self) -> bool {
        ((self.alpha.norm_sqr() + self.beta.norm_sqr()) - 1.0).abs() <= NORM_TOLERANCE
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}{:+.4}i)|0⟩ + ({:.4}{:+.4}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}
