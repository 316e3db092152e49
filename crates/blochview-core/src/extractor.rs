//! Per-qubit Bloch extraction over a whole state.

use tracing::{debug, warn};

use crate::bloch::{BlochVector, QubitBloch};
use crate::error::{BlochError, BlochResult};
use crate::reduce::{ReducedDensityMatrix, reduced_density_matrix};
use crate::state::StateVector;

/// Tolerance used when warning about non-normalized input.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Reduces a state vector to one Bloch vector per requested qubit.
///
/// Each extraction is an independent O(2^n) pass over the state; nothing is
/// cached between qubits. The extractor holds no mutable state and can be
/// shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlochExtractor {
    max_qubits: Option<u32>,
}

impl BlochExtractor {
    /// An extractor with no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// An extractor that refuses states wider than `max_qubits`.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            max_qubits: Some(max_qubits),
        }
    }

    /// The configured width limit, if any.
    pub fn max_qubits(&self) -> Option<u32> {
        self.max_qubits
    }

    /// Reduced density matrix of `qubit`.
    pub fn reduce(&self, state: &StateVector, qubit: u32) -> BlochResult<ReducedDensityMatrix> {
        self.check_width(state)?;
        reduced_density_matrix(state.amplitudes(), qubit, state.num_qubits())
    }

    /// Bloch vector of `qubit`.
    pub fn extract(&self, state: &StateVector, qubit: u32) -> BlochResult<BlochVector> {
        let vector = self.reduce(state, qubit)?.bloch_vector();
        debug!(qubit, x = vector.x, y = vector.y, z = vector.z, "extracted Bloch vector");
        Ok(vector)
    }

    /// Bloch vectors of every qubit, in qubit order.
    pub fn extract_all(&self, state: &StateVector) -> BlochResult<Vec<QubitBloch>> {
        self.check_width(state)?;
        if !state.is_normalized(NORMALIZATION_TOLERANCE) {
            warn!(
                norm_sqr = state.norm_sqr(),
                "state vector is not normalized; Bloch vectors are scaled populations"
            );
        }

        (0..state.num_qubits())
            .map(|qubit| {
                self.extract(state, qubit)
                    .map(|vector| QubitBloch { qubit, vector })
            })
            .collect()
    }

    fn check_width(&self, state: &StateVector) -> BlochResult<()> {
        match self.max_qubits {
            Some(max) if state.num_qubits() > max => Err(BlochError::TooManyQubits {
                num_qubits: state.num_qubits(),
                max,
            }),
            _ => Ok(()),
        }
    }
}
