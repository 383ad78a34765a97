//! cmdline - command line parser and completer
//!
//! Runs the interactive REPL by default, or one of the one-shot
//! subcommands.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode with the built-in sample registry
//! cmdline
//!
//! # Parse a single line
//! cmdline parse 'create_cube -r --name=cube'
//!
//! # Completion candidates for a partial line
//! cmdline complete 'create_sphere --i'
//! ```

use cmdline::cli::CliInterface;
use cmdline::error::Result;
use cmdline::repl::ReplEngine;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the REPL
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.print_banner();

    let registry = cli.load_registry()?;
    let mut repl = ReplEngine::new(registry, cli.config())?;
    repl.run()?;

    if !cli.args().quiet {
        println!("Goodbye!");
    }
    Ok(())
}

/// Initialize logging system based on the effective log level
///
/// CLI verbosity flags are already folded into the config level.
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
