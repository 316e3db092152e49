//! Error types for the core crate.

use thiserror::Error;

/// Errors produced while reducing a state vector to Bloch coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BlochError {
    /// The state vector length is not a power of two, or does not equal
    /// `2^num_qubits` for the declared qubit count.
    #[error("Invalid state vector dimension: {len} amplitudes{}", format_expected(.num_qubits))]
    InvalidDimension {
        /// Number of amplitudes supplied.
        len: usize,
        /// Declared qubit count, if one was given.
        num_qubits: Option<u32>,
    },

    /// The requested qubit is not in `[0, num_qubits)`.
    #[error("Qubit index {qubit} out of range for a {num_qubits}-qubit state")]
    QubitIndexOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the state.
        num_qubits: u32,
    },

    /// An amplitude has a NaN or infinite component.
    #[error("Non-finite amplitude at basis index {index}")]
    NonFiniteAmplitude {
        /// Basis index of the first offending amplitude.
        index: usize,
    },

    /// The state is wider than the extractor was configured to accept.
    #[error("State has {num_qubits} qubits, extractor accepts at most {max}")]
    TooManyQubits {
        /// Number of qubits in the state.
        num_qubits: u32,
        /// Configured upper bound.
        max: u32,
    },
}

fn format_expected(num_qubits: &Option<u32>) -> String {
    match num_qubits {
        Some(n) => match 1usize.checked_shl(*n) {
            Some(dim) => format!(" (expected {dim} for {n} qubits)"),
            None => format!(" ({n} qubits is not addressable)"),
        },
        None => " (not a power of two)".to_string(),
    }
}

/// Result type for Bloch extraction.
pub type BlochResult<T> = Result<T, BlochError>;
