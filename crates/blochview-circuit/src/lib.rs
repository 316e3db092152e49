//! `blochview-circuit` — the grid circuit a user assembles before simulating.
//!
//! A circuit is a mapping from `(wire, time)` cells to gates, with at most
//! one gate per cell. The grid turns into the [`CircuitRequest`] body the
//! external simulator expects.
//!
//! ```rust
//! use blochview_circuit::{CircuitGrid, GateKind};
//!
//! let mut grid = CircuitGrid::new(2, 3).unwrap();
//! grid.place(GateKind::H, 0, 0).unwrap();
//! grid.place_controlled(GateKind::Cnot, 0, 1, 1).unwrap();
//!
//! // Second gate on a taken cell is refused.
//! assert!(grid.place(GateKind::X, 0, 0).is_err());
//!
//! let request = grid.to_request();
//! assert_eq!(request.n_qubits, 2);
//! assert_eq!(request.circuit.len(), 2);
//! ```

pub mod error;
pub mod gate;
pub mod grid;
pub mod request;

pub use error::{CircuitError, CircuitResult};
pub use gate::GateKind;
pub use grid::{Cell, CircuitGrid, DEFAULT_QUBITS, DEFAULT_STEPS, MAX_QUBITS, MAX_STEPS, Slot};
pub use request::{CircuitRequest, GateOp};
