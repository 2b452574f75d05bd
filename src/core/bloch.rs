// src/core/bloch.rs

//! Bloch sphere projection of a qubit state.
//!
//! Any pure single-qubit state maps onto a point of the unit sphere in ℝ³
//! through the Pauli expectation values; the presentation layer animates this
//! point while the player stacks gates. The projection loses global phase,
//! which is exactly what the display wants.

use crate::core::constants::NORM_TOLERANCE;
use crate::core::state::QubitState;
use std::fmt;

/// A unit vector on the Bloch sphere.
///
/// Construction renormalizes, so the unit-length invariant always holds; a
/// zero-length input falls back to the north pole (0, 0, 1), the direction
/// of |0⟩.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    x: f64,
    y: f64,
    z: f64,
}

impl BlochVector {
    /// Creates a unit vector pointing along (x, y, z).
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let len = (x * x + y * y + z * z).sqrt();
        if len > f64::EPSILON {
            Self {
                x: x / len,
                y: y / len,
                z: z / len,
            }
        } else {
            // Degenerate input: north pole, matching the |0⟩ fallback of
            // QubitState construction.
            Self { x: 0.0, y: 0.0, z: 1.0 }
        }
    }

    /// Projects a state onto the sphere.
    ///
    /// With α = (ar, ai) and β = (br, bi):
    /// x = 2·Re(ᾱβ), y = 2·Im(ᾱβ), z = |α|² − |β|².
    pub fn from_state(state: &QubitState) -> Self {
        let cross = state.alpha().conj() * state.beta();
        let x = 2.0 * cross.re;
        let y = 2.0 * cross.im;
        let z = state.alpha().norm_sqr() - state.beta().norm_sqr();
        Self::new(x, y, z)
    }

    /// Direction of |0⟩ - the north pole.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Direction of |1⟩ - the south pole.
    pub fn one() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    /// Direction of |+⟩ - positive x axis.
    pub fn plus() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Direction of |−⟩ - negative x axis.
    pub fn minus() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    /// Direction of |i⟩ - positive y axis.
    pub fn plus_i() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Direction of |−i⟩ - negative y axis.
    pub fn minus_i() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    /// X coordinate in [-1, 1].
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate in [-1, 1].
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate in [-1, 1]; +1 is |0⟩, -1 is |1⟩.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Polar angle θ = acos(z) clamped into [0, π].
    pub fn theta(&self) -> f64 {
        self.z.clamp(-1.0, 1.0).acos()
    }

    /// Azimuthal angle φ = atan2(y, x) in (−π, π].
    pub fn phi(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Plain Euclidean distance to another vector. The display uses this for
    /// "near enough" visual feedback; judging uses fidelity instead.
    pub fn distance(&self, other: &BlochVector) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Whether the unit-length invariant holds within `NORM_TOLERANCE`.
    pub fn is_unit(&self) -> bool {
        ((self.x * self.x + self.y * self.y + self.z * self.z).sqrt() - 1.0).abs()
            <= NORM_TOLERANCE
    }
}

impl From<&QubitState> for BlochVector {
    fn from(state: &QubitState) -> Self {
        Self::from_state(state)
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
