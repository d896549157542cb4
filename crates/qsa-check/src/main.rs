//! qsa-check entry point.
//!
//! Initializes logging, runs the consistency check once, prints the
//! pass/fail line to stdout, and maps the result to the process exit code:
//! 0 = consistent, 1 = inconsistency found, 2 = check could not complete.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use qsa_check::{CheckOutcome, QsaChecker};

#[derive(Parser, Debug)]
#[command(name = "qsa-check")]
#[command(about = "Check QSA adapter consistency across transceiver ports", long_about = None)]
struct Args {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    info!("--- Starting qsa-check (Rust) ---");

    let mut checker = QsaChecker::new();

    match checker.run_check().await {
        Ok(CheckOutcome::Pass) => {
            println!("All ports checked successfully");
            ExitCode::SUCCESS
        }
        Ok(CheckOutcome::Violation { port, qsa_type }) => {
            println!(
                "Error on port {}. QSA type {} found on empty port",
                port, qsa_type
            );
            ExitCode::from(1)
        }
        Err(e) => {
            error!("qsa-check failed: {}", e);
            ExitCode::from(2)
        }
    }
}
