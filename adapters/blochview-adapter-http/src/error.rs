//! Error types for the HTTP adapter.

use thiserror::Error;

use blochview_circuit::CircuitError;
use blochview_core::BlochError;

/// Result type for simulator client operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors that can occur when talking to the simulator.
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Simulator answered with a non-success status.
    #[error("Simulator error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The circuit was rejected before submission.
    #[error("Invalid circuit: {0}")]
    Circuit(#[from] CircuitError),

    /// The returned state vector does not fit the request.
    #[error("Invalid state vector: {0}")]
    Bloch(#[from] BlochError),

    /// Client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A run was moved through its lifecycle out of order.
    #[error("Invalid run transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = HttpError::ApiError {
            status: 422,
            message: "n_qubits > 10 not supported".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("n_qubits > 10"));
    }

    #[test]
    fn test_bloch_error_converts() {
        let err: HttpError = BlochError::InvalidDimension {
            len: 3,
            num_qubits: Some(2),
        }
        .into();
        assert!(matches!(err, HttpError::Bloch(_)));
        assert!(err.to_string().contains("3 amplitudes"));
    }

    #[test]
    fn test_transition_display() {
        let err = HttpError::InvalidTransition {
            from: "idle",
            to: "succeeded",
        };
        assert_eq!(err.to_string(), "Invalid run transition from idle to succeeded");
    }
}
