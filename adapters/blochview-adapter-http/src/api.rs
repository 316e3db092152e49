//! Simulator REST client.
//!
//! The simulator exposes a single endpoint, `POST /simulate`, which takes a
//! [`CircuitRequest`] and answers with the final state vector as
//! `{"state": [{"real": .., "imag": ..}, ...]}`.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use blochview_circuit::{CircuitGrid, CircuitRequest};
use blochview_core::{Amplitude, StateVector};

use crate::config::SimulatorConfig;
use crate::error::{HttpError, HttpResult};

/// Response body of `POST /simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateResponse {
    /// Final state amplitudes in basis-index order.
    pub state: Vec<Amplitude>,
}

/// Client for the external state-vector simulator.
#[derive(Debug, Clone)]
pub struct SimulatorClient {
    /// HTTP client with timeouts configured.
    client: Client,
    /// Base URL (without trailing slash).
    base_url: String,
}

impl SimulatorClient {
    /// Create a client from `config`.
    pub fn new(config: &SimulatorConfig) -> HttpResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(HttpError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> HttpResult<Self> {
        Self::new(&SimulatorConfig::with_base_url(base_url))
    }

    /// The endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a POST request with a JSON body, returning the deserialized JSON body.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> HttpResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!("POST {}", url);

        let resp = self.client.post(&url).json(body).send().await?;
        self.handle_response(resp).await
    }

    /// Deserialize a success body or turn the status and body text into an error.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> HttpResult<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(HttpError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Submit `request` and return the simulated state vector.
    ///
    /// The request is checked against the grid rules before anything is
    /// sent, and the returned vector must hold exactly `2^n_qubits`
    /// amplitudes.
    #[instrument(
        skip(self, request),
        fields(n_qubits = request.n_qubits, ops = request.circuit.len())
    )]
    pub async fn simulate(&self, request: &CircuitRequest) -> HttpResult<StateVector> {
        CircuitGrid::from_request(request)?;

        let response: StateResponse = self.post("simulate", request).await?;
        debug!(amplitudes = response.state.len(), "received state vector");

        Ok(StateVector::from_wire(&response.state, request.n_qubits)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let client = SimulatorClient::with_base_url("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(matches!(
            SimulatorClient::with_base_url("ftp://example"),
            Err(HttpError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_state_response_shape() {
        let src = r#"{"state":[{"real":0.7071,"imag":0.0},{"real":0.0,"imag":-0.7071}]}"#;
        let resp: StateResponse = serde_json::from_str(src).unwrap();
        assert_eq!(resp.state.len(), 2);
        assert_eq!(resp.state[1], Amplitude::new(0.0, -0.7071));
    }
}
