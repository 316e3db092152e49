//! Error types for the circuit crate.

use thiserror::Error;

use crate::gate::GateKind;

/// Errors raised while building or validating a grid circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// The grid would exceed the simulator's qubit limit.
    #[error("{num_qubits} qubits requested, the simulator supports at most {max}")]
    TooManyQubits {
        /// Requested qubit count.
        num_qubits: u32,
        /// Supported maximum.
        max: u32,
    },

    /// The grid would be wider than the supported number of time steps.
    #[error("{num_steps} time steps requested, at most {max} are supported")]
    TooManySteps {
        /// Requested number of time steps.
        num_steps: u32,
        /// Supported maximum.
        max: u32,
    },

    /// A grid needs at least one wire and one time step.
    #[error("Grid must have at least one wire and one time step, got {num_qubits}x{num_steps}")]
    EmptyGrid {
        /// Requested number of wires.
        num_qubits: u32,
        /// Requested number of time steps.
        num_steps: u32,
    },

    /// A wire index lies outside the grid.
    #[error("Wire {wire} out of range for a {num_qubits}-wire grid")]
    WireOutOfRange {
        /// The offending wire.
        wire: u32,
        /// Number of wires in the grid.
        num_qubits: u32,
    },

    /// A time step lies outside the grid.
    #[error("Time step {time} out of range for a {num_steps}-step grid")]
    TimeOutOfRange {
        /// The offending time step.
        time: u32,
        /// Number of time steps in the grid.
        num_steps: u32,
    },

    /// The cell already holds a gate.
    #[error("Cell (wire {wire}, time {time}) is already occupied")]
    CellOccupied {
        /// Wire of the occupied cell.
        wire: u32,
        /// Time step of the occupied cell.
        time: u32,
    },

    /// Wrong number of wires for the gate.
    #[error("Gate '{gate}' acts on {expected} wire(s), got {got}")]
    ArityMismatch {
        /// The gate being placed.
        gate: GateKind,
        /// Wires the gate needs.
        expected: usize,
        /// Wires supplied.
        got: usize,
    },

    /// A multi-wire gate names the same wire twice.
    #[error("Wire {0} used twice in one gate")]
    DuplicateWire(u32),

    /// A gate label the simulator does not know.
    #[error("Unknown gate '{0}'. Available: H, X, CNOT")]
    UnknownGate(String),
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
