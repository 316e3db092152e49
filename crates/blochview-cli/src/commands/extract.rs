//! Extract command implementation.
//!
//! Reduce a stored state vector to per-qubit Bloch coordinates.

use anyhow::Result;
use console::style;
use tracing::info;

use blochview_core::BlochExtractor;

use super::common::{extract_rows, load_state, print_rows};

/// Execute the extract command.
pub fn execute(
    input: &str,
    qubits: Option<u32>,
    qubit: Option<u32>,
    max_qubits: u32,
    format: &str,
) -> Result<()> {
    let state = load_state(input, qubits)?;
    info!(num_qubits = state.num_qubits(), "loaded state vector");

    if format != "json" {
        println!(
            "{} Extracting Bloch vectors from {}",
            style("→").cyan().bold(),
            style(input).green()
        );
    }

    let extractor = BlochExtractor::with_max_qubits(max_qubits);
    let rows = extract_rows(&extractor, &state, qubit)?;
    print_rows(&extractor, &state, rows, format)
}
