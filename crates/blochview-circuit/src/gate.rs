//! Gate vocabulary understood by the simulator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CircuitError;

/// A gate that can be dropped onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard.
    #[serde(rename = "H")]
    H,
    /// Pauli-X (NOT).
    #[serde(rename = "X")]
    X,
    /// Controlled-NOT; wires are `[control, target]`.
    #[serde(rename = "CNOT")]
    Cnot,
}

impl GateKind {
    /// Every gate in palette order.
    pub const ALL: [GateKind; 3] = [GateKind::H, GateKind::X, GateKind::Cnot];

    /// Number of wires the gate acts on.
    pub fn arity(&self) -> usize {
        match self {
            GateKind::H | GateKind::X => 1,
            GateKind::Cnot => 2,
        }
    }

    /// Wire-format label.
    pub fn label(&self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Cnot => "CNOT",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GateKind {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" => Ok(GateKind::H),
            "x" | "not" => Ok(GateKind::X),
            "cnot" | "cx" => Ok(GateKind::Cnot),
            _ => Err(CircuitError::UnknownGate(s.to_string())),
        }
    }
}
