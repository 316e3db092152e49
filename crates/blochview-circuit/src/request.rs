//! Simulator request wire types.
//!
//! `POST /simulate` takes
//!
//! ```json
//! {
//!   "n_qubits": 2,
//!   "circuit": [
//!     {"gate": "H",    "wires": [0],    "time": 0},
//!     {"gate": "CNOT", "wires": [0, 1], "time": 1}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::gate::GateKind;

/// One placed gate as sent to the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateOp {
    /// Gate label.
    pub gate: GateKind,
    /// Wires, `[control, target]` for CNOT.
    pub wires: Vec<u32>,
    /// Time step (grid column).
    pub time: u32,
}

impl GateOp {
    /// A single-wire placement.
    pub fn single(gate: GateKind, wire: u32, time: u32) -> Self {
        Self {
            gate,
            wires: vec![wire],
            time,
        }
    }

    /// A controlled placement.
    pub fn controlled(gate: GateKind, control: u32, target: u32, time: u32) -> Self {
        Self {
            gate,
            wires: vec![control, target],
            time,
        }
    }
}

/// Body of a simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitRequest {
    /// Placements, in any order; the simulator applies them by time step.
    pub circuit: Vec<GateOp>,
    /// Width of the state vector to produce.
    pub n_qubits: u32,
}
