//! JSON wire shape of a complex amplitude.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// One complex coefficient of a state vector as exchanged with the simulator:
/// `{"real": .., "imag": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Amplitude {
    /// Real part.
    pub real: f64,
    /// Imaginary part.
    pub imag: f64,
}

impl Amplitude {
    /// Create an amplitude from its parts.
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Squared magnitude `real² + imag²`.
    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Whether both components are finite.
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl From<Amplitude> for Complex64 {
    fn from(a: Amplitude) -> Self {
        Complex64::new(a.real, a.imag)
    }
}

impl From<Complex64> for Amplitude {
    fn from(c: Complex64) -> Self {
        Self {
            real: c.re,
            imag: c.im,
        }
    }
}
