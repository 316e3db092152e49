//! Owned n-qubit state vector.
//!
//! Basis index `k` encodes every qubit's value as a binary number with
//! qubit 0 in the most-significant position: qubit `q` sits at bit
//! `num_qubits - q - 1`.

use num_complex::Complex64;

use crate::amplitude::Amplitude;
use crate::error::{BlochError, BlochResult};

/// A state vector of `2^num_qubits` complex amplitudes.
///
/// The vector is never renormalized. Callers are expected to supply a
/// normalized state; a vector with `Σ|a_k|² ≠ 1` yields proportionally
/// scaled populations.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: u32,
}

impl StateVector {
    /// Wrap `amplitudes` as a `num_qubits`-qubit state.
    pub fn new(amplitudes: Vec<Complex64>, num_qubits: u32) -> BlochResult<Self> {
        check_dimension(amplitudes.len(), num_qubits)?;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Wrap `amplitudes`, inferring the qubit count from the length.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> BlochResult<Self> {
        let len = amplitudes.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(BlochError::InvalidDimension {
                len,
                num_qubits: None,
            });
        }
        Ok(Self {
            amplitudes,
            num_qubits: len.trailing_zeros(),
        })
    }

    /// Build a state from its `{real, imag}` wire form.
    pub fn from_wire(amplitudes: &[Amplitude], num_qubits: u32) -> BlochResult<Self> {
        Self::new(amplitudes.iter().copied().map(Into::into).collect(), num_qubits)
    }

    /// The all-zeros state `|0...0⟩`.
    ///
    /// # Panics
    ///
    /// Panics if `num_qubits >= usize::BITS`.
    pub fn zero(num_qubits: u32) -> Self {
        Self::basis(num_qubits, 0)
    }

    /// The computational basis state `|k⟩`.
    ///
    /// # Panics
    ///
    /// Panics if `num_qubits >= usize::BITS` or `k >= 2^num_qubits`.
    pub fn basis(num_qubits: u32, k: usize) -> Self {
        assert!(
            num_qubits < usize::BITS,
            "{num_qubits} qubits exceed the addressable state size"
        );
        let size = 1usize << num_qubits;
        assert!(k < size, "basis index {k} out of range for {num_qubits} qubits");
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[k] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// The amplitudes in basis-index order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of amplitudes (`2^num_qubits`).
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false: a valid state has at least one amplitude.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// `Σ|a_k|²`.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Whether `Σ|a_k|²` is within `tolerance` of 1.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Convert to the `{real, imag}` wire form.
    pub fn to_wire(&self) -> Vec<Amplitude> {
        self.amplitudes.iter().copied().map(Amplitude::from).collect()
    }

    /// Consume the state, returning its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }
}

/// Fail unless `len == 2^num_qubits`.
pub(crate) fn check_dimension(len: usize, num_qubits: u32) -> BlochResult<()> {
    match 1usize.checked_shl(num_qubits) {
        Some(expected) if expected == len => Ok(()),
        _ => Err(BlochError::InvalidDimension {
            len,
            num_qubits: Some(num_qubits),
        }),
    }
}
