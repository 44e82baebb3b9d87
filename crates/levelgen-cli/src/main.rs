mod cli;
mod config;
mod prompt;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use levelgen_core::Pipeline;
use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            e.print().ok();
            return code;
        }
    };

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let root = std::env::current_dir().context("Cannot determine the working directory")?;

    // Load configuration
    let config = Config::load(&root).context("Failed to load configuration")?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    levelgen_logging::init_logging(level)?;
    debug!("Configuration: {:?}", config);

    let pipeline = Pipeline::new(config.layout(&root)).dry_run(cli.dry_run);
    pipeline
        .check()
        .context("Must be run from the root of the project")?;

    if !cli.yes && !cli.dry_run {
        let confirmed = prompt::confirm(
            io::stdin().lock(),
            io::stdout().lock(),
            &cli.skill_name,
            &cli.level_name,
        )?;
        if !confirmed {
            println!("Aborting, no changes made.");
            return Ok(ExitCode::FAILURE);
        }
        println!();
    }

    let report = pipeline.run(&cli.skill_name, &cli.level_name)?;
    print!("{report}");

    if report.is_dry_run() {
        println!("Dry run, nothing written.");
    } else {
        println!("Done.");
    }
    Ok(ExitCode::SUCCESS)
}
