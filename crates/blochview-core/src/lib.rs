//! `blochview-core` — single-qubit views of an n-qubit state vector.
//!
//! Takes the full state vector produced by an external simulator and reduces
//! it, one qubit at a time, to that qubit's reduced density matrix and the
//! matching point on the Bloch sphere.
//!
//! # Conventions
//!
//! - Qubit `q` of an `n`-qubit state occupies bit `n - q - 1` of the basis
//!   index, so qubit 0 is the most-significant bit.
//! - `x = 2·Re ρ01`, `y = -2·Im ρ01`, `z = ρ00 - ρ11`.
//! - Input is never renormalized.
//!
//! # Quick start
//!
//! ```rust
//! use blochview_core::{BlochExtractor, StateVector};
//! use num_complex::Complex64;
//!
//! // Bell pair (|00⟩ + |11⟩)/√2: each half is maximally mixed.
//! let s = 1.0 / 2.0_f64.sqrt();
//! let zero = Complex64::new(0.0, 0.0);
//! let state = StateVector::new(
//!     vec![Complex64::new(s, 0.0), zero, zero, Complex64::new(s, 0.0)],
//!     2,
//! )
//! .unwrap();
//!
//! let rows = BlochExtractor::new().extract_all(&state).unwrap();
//! assert_eq!(rows.len(), 2);
//! assert!(rows[0].vector.magnitude() < 1e-12);
//! ```

pub mod amplitude;
pub mod bloch;
pub mod error;
pub mod extractor;
pub mod reduce;
pub mod state;

pub use amplitude::Amplitude;
pub use bloch::{BlochAngles, BlochVector, QubitBloch};
pub use error::{BlochError, BlochResult};
pub use extractor::BlochExtractor;
pub use reduce::{ReducedDensityMatrix, compute_bloch_coordinates, reduced_density_matrix};
pub use state::StateVector;
