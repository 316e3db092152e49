//! blochview adapter for an external state-vector simulator over HTTP
//!
//! The simulator is a separate service: it receives the grid circuit as a
//! [`CircuitRequest`](blochview_circuit::CircuitRequest) on `POST /simulate`
//! and returns the final state vector. This crate owns that exchange and
//! the explicit lifecycle of a request ([`RunState`]).
//!
//! # Configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCHVIEW_SIMULATOR_URL` | `http://127.0.0.1:8000` | Simulator base URL |
//! | `BLOCHVIEW_TIMEOUT_SECS` | `60` | Whole-request timeout |
//!
//! # Example
//!
//! ```ignore
//! use blochview_adapter_http::{SimulationRun, SimulatorClient, SimulatorConfig};
//! use blochview_circuit::{CircuitGrid, GateKind};
//! use blochview_core::BlochExtractor;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SimulatorClient::new(&SimulatorConfig::default())?;
//!
//!     let mut grid = CircuitGrid::new(2, 5)?;
//!     grid.place(GateKind::H, 0, 0)?;
//!     grid.place_controlled(GateKind::Cnot, 0, 1, 1)?;
//!
//!     let mut run = SimulationRun::new();
//!     run.execute(&client, &grid.to_request()).await?;
//!
//!     if let Some(rows) = run.bloch_vectors(&BlochExtractor::new()) {
//!         for row in rows? {
//!             println!("q{}: {}", row.qubit, row.vector);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod api;
mod config;
mod error;
mod run;

pub use api::{SimulatorClient, StateResponse};
pub use config::{DEFAULT_BASE_URL, SIMULATOR_URL_ENV, SimulatorConfig, TIMEOUT_ENV};
pub use error::{HttpError, HttpResult};
pub use run::{RunState, SimulationRun};
