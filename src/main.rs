//! Rebates CLI
//!
//! Loads rebates and products from a fixture file, calculates the rebate for
//! the requested product and volume, and records it when it applies.

use std::{io, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;

use rebates::{fixtures::Fixture, observability::init_subscriber, service::StoreRebateService};

use crate::cli::{Cli, calculate_and_report};

mod cli;

fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            #[expect(clippy::print_stderr, reason = "user facing error output")]
            {
                eprintln!("error: {error:#}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let store = Fixture::from_path(&cli.fixture)
        .with_context(|| format!("failed to load fixture {}", cli.fixture.display()))?
        .into_store();

    let store = Arc::new(store);
    let service = StoreRebateService::new(Arc::clone(&store), store);

    let stdin = io::stdin();
    let stdout = io::stdout();

    let request = cli.request(&mut stdin.lock(), &mut stdout.lock())?;

    calculate_and_report(&service, &request, &mut stdout.lock())?;

    Ok(())
}
