//! Grid command implementation.

use anyhow::Result;
use console::style;

use super::common::load_circuit;

/// Execute the grid command.
pub fn execute(input: &str, qubits: Option<u32>, format: &str) -> Result<()> {
    let grid = load_circuit(input, qubits)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&grid.to_request())
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        _ => {
            println!(
                "{} {} wires × {} steps, {} gates",
                style("→").cyan().bold(),
                grid.num_qubits(),
                grid.num_steps(),
                grid.len()
            );
            print!("{}", grid.render_text());
        }
    }
    Ok(())
}
