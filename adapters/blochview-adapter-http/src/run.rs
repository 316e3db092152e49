//! Lifecycle of one simulation request.
//!
//! ```text
//!   Idle ──start()──→ Pending ──succeed()──→ Succeeded(state)
//!                       │
//!                       └──────fail()──────→ Failed(message)
//! ```
//!
//! Terminal states may be restarted, which is how a retry is expressed.

use tracing::{info, warn};

use blochview_circuit::CircuitRequest;
use blochview_core::{BlochExtractor, BlochResult, QubitBloch, StateVector};

use crate::api::SimulatorClient;
use crate::error::{HttpError, HttpResult};

/// Where a simulation request currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RunState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// The simulator returned a state vector.
    Succeeded(StateVector),
    /// The request failed; the message is meant for display.
    Failed(String),
}

impl RunState {
    /// Short lowercase name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Pending => "pending",
            RunState::Succeeded(_) => "succeeded",
            RunState::Failed(_) => "failed",
        }
    }

    /// Whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, RunState::Pending)
    }

    /// Whether the run has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Succeeded(_) | RunState::Failed(_))
    }

    /// The state vector of a successful run.
    pub fn result(&self) -> Option<&StateVector> {
        match self {
            RunState::Succeeded(state) => Some(state),
            _ => None,
        }
    }

    /// The failure message of a failed run.
    pub fn error(&self) -> Option<&str> {
        match self {
            RunState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Pending`. Allowed from `Idle` and from either terminal state.
    pub fn start(&mut self) -> HttpResult<()> {
        if self.is_pending() {
            return Err(self.transition_error("pending"));
        }
        *self = RunState::Pending;
        Ok(())
    }

    /// Complete a pending run with its state vector.
    pub fn succeed(&mut self, state: StateVector) -> HttpResult<()> {
        if !self.is_pending() {
            return Err(self.transition_error("succeeded"));
        }
        *self = RunState::Succeeded(state);
        Ok(())
    }

    /// Fail a pending run.
    pub fn fail(&mut self, message: impl Into<String>) -> HttpResult<()> {
        if !self.is_pending() {
            return Err(self.transition_error("failed"));
        }
        *self = RunState::Failed(message.into());
        Ok(())
    }

    fn transition_error(&self, to: &'static str) -> HttpError {
        HttpError::InvalidTransition {
            from: self.name(),
            to,
        }
    }
}

/// Drives one request through [`RunState`].
#[derive(Debug, Default)]
pub struct SimulationRun {
    state: RunState,
}

impl SimulationRun {
    /// A run that has not been started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Submit `request` and record the outcome.
    ///
    /// Simulator and validation failures end in `Failed` with the error's
    /// message rather than being returned; only a call made while another
    /// submission is pending is an error.
    pub async fn execute(
        &mut self,
        client: &SimulatorClient,
        request: &CircuitRequest,
    ) -> HttpResult<&RunState> {
        self.state.start()?;
        match client.simulate(request).await {
            Ok(state) => {
                info!(num_qubits = state.num_qubits(), "simulation succeeded");
                self.state.succeed(state)?;
            }
            Err(e) => {
                warn!(error = %e, "simulation failed");
                self.state.fail(e.to_string())?;
            }
        }
        Ok(&self.state)
    }

    /// Bloch vectors of every qubit once the run has succeeded.
    pub fn bloch_vectors(
        &self,
        extractor: &BlochExtractor,
    ) -> Option<BlochResult<Vec<QubitBloch>>> {
        self.state.result().map(|state| extractor.extract_all(state))
    }
}
