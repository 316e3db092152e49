//! Shared helpers for CLI commands.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde::{Deserialize, Serialize};

use blochview_circuit::{CircuitGrid, CircuitRequest, DEFAULT_QUBITS, GateOp};
use blochview_core::{Amplitude, BlochExtractor, QubitBloch, StateVector};

/// Accepted shapes of a state-vector file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StateFile {
    /// A simulator response, optionally annotated with its width.
    Wrapped {
        state: Vec<Amplitude>,
        #[serde(default)]
        n_qubits: Option<u32>,
    },
    /// A bare amplitude list.
    Bare(Vec<Amplitude>),
}

/// Accepted shapes of a circuit file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CircuitFile {
    /// A full simulator request.
    Request(CircuitRequest),
    /// A bare placement list.
    Placements(Vec<GateOp>),
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }

    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

/// Parse a state vector from JSON.
///
/// The qubit count comes from `qubits` if given, then from an `n_qubits`
/// field in the file, and is otherwise inferred from the vector length.
pub fn parse_state(source: &str, qubits: Option<u32>) -> Result<StateVector> {
    let file: StateFile = serde_json::from_str(source)
        .context("Expected a JSON array of {real, imag} or {\"state\": [...]}")?;

    let (amplitudes, declared) = match file {
        StateFile::Wrapped { state, n_qubits } => (state, n_qubits),
        StateFile::Bare(state) => (state, None),
    };

    let state = match qubits.or(declared) {
        Some(n) => StateVector::from_wire(&amplitudes, n)?,
        None => StateVector::from_amplitudes(amplitudes.into_iter().map(Into::into).collect())?,
    };
    Ok(state)
}

/// Load a state vector from a file (or stdin).
pub fn load_state(path: &str, qubits: Option<u32>) -> Result<StateVector> {
    let source = read_input(path)?;
    parse_state(&source, qubits).with_context(|| format!("Invalid state vector in {path}"))
}

/// Parse and validate a circuit from JSON.
///
/// A bare placement list takes its width from `qubits`, defaulting to the
/// standard three-wire grid.
pub fn parse_circuit(source: &str, qubits: Option<u32>) -> Result<CircuitGrid> {
    let file: CircuitFile = serde_json::from_str(source)
        .context("Expected {\"n_qubits\": .., \"circuit\": [...]} or a list of placements")?;

    let request = match file {
        CircuitFile::Request(mut request) => {
            if let Some(n) = qubits {
                request.n_qubits = n;
            }
            request
        }
        CircuitFile::Placements(circuit) => CircuitRequest {
            circuit,
            n_qubits: qubits.unwrap_or(DEFAULT_QUBITS),
        },
    };

    Ok(CircuitGrid::from_request(&request)?)
}

/// Load a circuit from a file (or stdin).
pub fn load_circuit(path: &str, qubits: Option<u32>) -> Result<CircuitGrid> {
    let source = read_input(path)?;
    parse_circuit(&source, qubits).with_context(|| format!("Invalid circuit in {path}"))
}

/// Bloch vectors for one qubit or for all of them.
pub fn extract_rows(
    extractor: &BlochExtractor,
    state: &StateVector,
    qubit: Option<u32>,
) -> Result<Vec<QubitBloch>> {
    let rows = match qubit {
        Some(q) => vec![QubitBloch {
            qubit: q,
            vector: extractor.extract(state, q)?,
        }],
        None => extractor.extract_all(state)?,
    };
    Ok(rows)
}

/// JSON document printed by `--format json`.
#[derive(Debug, Serialize)]
pub struct BlochReport {
    /// Width of the state the rows were taken from.
    pub num_qubits: u32,
    /// One row per requested qubit.
    pub qubits: Vec<QubitBloch>,
}

/// Print rows as JSON or as a table.
pub fn print_rows(
    extractor: &BlochExtractor,
    state: &StateVector,
    rows: Vec<QubitBloch>,
    format: &str,
) -> Result<()> {
    match format {
        "json" => {
            let report = BlochReport {
                num_qubits: state.num_qubits(),
                qubits: rows,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        _ => print_table(extractor, state, &rows)?,
    }
    Ok(())
}

/// Print Bloch vectors in a table (shared by extract and simulate).
fn print_table(extractor: &BlochExtractor, state: &StateVector, rows: &[QubitBloch]) -> Result<()> {
    println!(
        "\n{} Bloch vectors ({} qubits, ‖ψ‖² = {:.6}):",
        style("✓").green().bold(),
        state.num_qubits(),
        state.norm_sqr()
    );
    println!(
        "  {:>5}  {:>8}  {:>8}  {:>8}  {:>6}  {:>6}",
        "qubit", "x", "y", "z", "|r|", "purity"
    );

    for row in rows {
        let purity = extractor.reduce(state, row.qubit)?.purity();
        let v = row.vector;
        println!(
            "  {:>5}  {:>8.4}  {:>8.4}  {:>8.4}  {:>6.3}  {:>6.3}",
            style(format!("q{}", row.qubit)).cyan(),
            v.x,
            v.y,
            v.z,
            v.magnitude(),
            purity
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_state_infers_width() {
        let src = r#"[
            {"real":1,"imag":0},{"real":0,"imag":0},
            {"real":0,"imag":0},{"real":0,"imag":0}
        ]"#;
        let state = parse_state(src, None).unwrap();
        assert_eq!(state.num_qubits(), 2);
    }

    #[test]
    fn test_parse_wrapped_state() {
        let src = r#"{"state":[{"real":0,"imag":0},{"real":1,"imag":0}]}"#;
        let state = parse_state(src, None).unwrap();
        assert_eq!(state.num_qubits(), 1);
    }

    #[test]
    fn test_declared_width_must_match() {
        let src = r#"{"state":[{"real":1,"imag":0},{"real":0,"imag":0}],"n_qubits":2}"#;
        assert!(parse_state(src, None).is_err());
        // The flag wins over the file.
        assert!(parse_state(src, Some(1)).is_ok());
    }

    #[test]
    fn test_parse_state_rejects_odd_length() {
        let src = r#"[{"real":1,"imag":0},{"real":0,"imag":0},{"real":0,"imag":0}]"#;
        let err = parse_state(src, None).unwrap_err();
        assert!(format!("{err:#}").contains("not a power of two"));
    }

    #[test]
    fn test_parse_circuit_placements_default_width() {
        let src = r#"[{"gate":"H","wires":[0],"time":0}]"#;
        let grid = parse_circuit(src, None).unwrap();
        assert_eq!(grid.num_qubits(), DEFAULT_QUBITS);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_parse_circuit_request() {
        let src = r#"{"n_qubits":2,"circuit":[{"gate":"CNOT","wires":[0,1],"time":0}]}"#;
        let grid = parse_circuit(src, None).unwrap();
        assert_eq!(grid.num_qubits(), 2);
    }

    #[test]
    fn test_parse_circuit_rejects_overlap() {
        let src = r#"[{"gate":"H","wires":[0],"time":0},{"gate":"X","wires":[0],"time":0}]"#;
        assert!(parse_circuit(src, None).is_err());
    }

    #[test]
    fn test_single_qubit_row() {
        let state = StateVector::basis(3, 0b001);
        let rows = extract_rows(&BlochExtractor::new(), &state, Some(2)).unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].vector.z + 1.0).abs() < 1e-12);

        assert!(extract_rows(&BlochExtractor::new(), &state, Some(3)).is_err());
    }
}
