//! Simulate command implementation.
//!
//! Submit a grid circuit to the external simulator and show the Bloch
//! vector of every qubit in the resulting state.

use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use blochview_adapter_http::{RunState, SimulationRun, SimulatorClient, SimulatorConfig};
use blochview_core::BlochExtractor;

use super::common::{load_circuit, print_rows};

/// Execute the simulate command.
pub async fn execute(
    input: &str,
    qubits: Option<u32>,
    url: Option<&str>,
    timeout_secs: Option<u64>,
    format: &str,
) -> Result<()> {
    let grid = load_circuit(input, qubits)?;

    let mut config = match url {
        Some(url) => SimulatorConfig::with_base_url(url),
        None => SimulatorConfig::default(),
    };
    if let Some(secs) = timeout_secs {
        config = config.timeout(Duration::from_secs(secs));
    }
    let client = SimulatorClient::new(&config)?;

    let quiet = format == "json";
    if !quiet {
        println!(
            "{} Simulating {} on {}",
            style("→").cyan().bold(),
            style(input).green(),
            style(client.base_url()).yellow()
        );
        print!("{}", grid.render_text());
    }

    let spinner = ProgressBar::new_spinner();
    if quiet {
        spinner.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .map_err(|e| anyhow::anyhow!("Invalid progress template: {e}"))?,
    );
    spinner.set_message("Waiting for simulator...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut run = SimulationRun::new();
    run.execute(&client, &grid.to_request()).await?;
    spinner.finish_and_clear();

    let extractor = BlochExtractor::new();
    match (run.bloch_vectors(&extractor), run.state()) {
        (Some(rows), RunState::Succeeded(state)) => print_rows(&extractor, state, rows?, format),
        (_, RunState::Failed(message)) => anyhow::bail!("Simulation failed: {message}"),
        (_, other) => anyhow::bail!("Simulation ended in unexpected state '{}'", other.name()),
    }
}
