//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Bloch sphere views of simulated quantum states",
        style("blochview").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  blochview-core          State vectors and Bloch extraction");
    println!("  blochview-circuit       Grid circuit model");
    println!("  blochview-adapter-http  Simulator client");
    println!("  blochview-cli           Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
