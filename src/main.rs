//! # customer-orders
//!
//! Seeds the store with the demo catalog and customers, then runs the
//! selection workflow on the terminal.
//!
//! 1. Parse the [`Config`] and install tracing.
//! 2. Start the [`OrderSystem`] (journaled when `--data-dir` is given).
//! 3. Seed products, then customers. A failure here ends the process with status 1.
//! 4. Run the [`SelectionWorkflow`] over stdin/stdout until the operator quits.
//! 5. Shut the actors down.
//!
//! A fatal error is logged once and printed once to stderr.

use std::error::Error;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use customer_orders::config::Config;
use customer_orders::lifecycle::{setup_tracing, OrderSystem, SeededRosters};
use customer_orders::seed;
use customer_orders::selection::{SelectionWorkflow, SessionSummary};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    setup_tracing(config.verbose);

    info!(?config, "Starting customer-orders");
    match run(&config).await {
        Ok(summary) => {
            info!(
                selections = summary.selections.len(),
                format_errors = summary.format_errors,
                lookup_misses = summary.lookup_misses,
                "Application completed successfully"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Application failed");
            eprintln!("customer-orders: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<SessionSummary, Box<dyn Error + Send + Sync>> {
    let system = OrderSystem::open(config).await?;

    let span = tracing::info_span!("seeding");
    let seeded = system
        .seed(seed::products(), seed::customers())
        .instrument(span)
        .await;
    let SeededRosters { customers, products } = match seeded {
        Ok(rosters) => rosters,
        Err(e) => {
            system.shutdown().await?;
            return Err(e.into());
        }
    };

    let session = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let stdout = io::stdout();
        SelectionWorkflow::new(customers, products, stdin.lock(), stdout.lock()).run()
    })
    .await;

    system.shutdown().await?;
    Ok(session??)
}
