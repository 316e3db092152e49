//! Bloch sphere coordinates.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A point inside (or on) the Bloch sphere in Cartesian coordinates.
///
/// `+z` is `|0⟩`, `-z` is `|1⟩`. Pure states have unit length; mixed
/// states (e.g. one half of an entangled pair) lie strictly inside.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate in `[-1, 1]`.
    pub x: f64,
    /// Y coordinate in `[-1, 1]`.
    pub y: f64,
    /// Z coordinate in `[-1, 1]`.
    pub z: f64,
}

/// Spherical angles of a Bloch vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π], measured from `+z`.
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π), measured from `+x`.
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared length `x² + y² + z²`.
    pub fn magnitude_sqr(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length of the vector. 1 for pure states, < 1 for mixed states.
    pub fn magnitude(&self) -> f64 {
        self.magnitude_sqr().sqrt()
    }

    /// Whether the vector lies on the sphere surface within `tolerance`.
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Convert to spherical angles.
    ///
    /// The zero vector (maximally mixed state) has no direction and maps
    /// to `θ = φ = 0`.
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();
        if r < 1e-12 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+.4}, {:+.4}, {:+.4})", self.x, self.y, self.z)
    }
}

/// Bloch coordinates of one qubit of a larger state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitBloch {
    /// Qubit index (0 is the most-significant bit of the basis index).
    pub qubit: u32,
    /// The qubit's reduced-state Bloch vector.
    #[serde(flatten)]
    pub vector: BlochVector,
}
