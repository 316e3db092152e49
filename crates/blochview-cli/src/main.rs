//! blochview Command-Line Interface
//!
//! Assemble small circuits on a wires × time grid, run them on an external
//! state-vector simulator, and read off each qubit's Bloch vector.
//!
//! ```text
//!                 +z |0⟩
//!                  │
//!              .───┼───.
//!            ╱     │     ╲
//!           │      ●──────│── +x
//!            ╲    ╱      ╱
//!              '─╱─────'
//!               ╱
//!             +y        -z |1⟩
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{extract, grid, simulate, version};

/// blochview - Bloch sphere coordinates for every qubit of a simulated circuit
#[derive(Parser)]
#[command(name = "blochview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Bloch vectors from a state vector file
    Extract {
        /// Input file (JSON), or - for stdin
        #[arg(short, long)]
        input: String,

        /// Number of qubits (inferred from the vector length if omitted)
        #[arg(short = 'n', long)]
        qubits: Option<u32>,

        /// Only report this qubit
        #[arg(short, long)]
        qubit: Option<u32>,

        /// Refuse states wider than this
        #[arg(long, default_value_t = 20, env = "BLOCHVIEW_MAX_QUBITS")]
        max_qubits: u32,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run a circuit on the simulator and show every qubit's Bloch vector
    Simulate {
        /// Circuit file (JSON), or - for stdin
        #[arg(short, long)]
        input: String,

        /// Number of qubits (overrides the file)
        #[arg(short = 'n', long)]
        qubits: Option<u32>,

        /// Simulator base URL
        #[arg(short, long, env = "BLOCHVIEW_SIMULATOR_URL")]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Validate and draw a circuit grid
    Grid {
        /// Circuit file (JSON), or - for stdin
        #[arg(short, long)]
        input: String,

        /// Number of qubits (overrides the file)
        #[arg(short = 'n', long)]
        qubits: Option<u32>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Extract {
            input,
            qubits,
            qubit,
            max_qubits,
            format,
        } => extract::execute(&input, qubits, qubit, max_qubits, &format),

        Commands::Simulate {
            input,
            qubits,
            url,
            timeout,
            format,
        } => simulate::execute(&input, qubits, url.as_deref(), timeout, &format).await,

        Commands::Grid {
            input,
            qubits,
            format,
        } => grid::execute(&input, qubits, &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
