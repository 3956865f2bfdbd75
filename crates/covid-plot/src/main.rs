// File: crates/covid-plot/src/main.rs
// Summary: Binary entry point: logging setup, CLI parse, pipeline run, summary print.

use std::process::ExitCode;

use clap::Parser;
use covid_plot::cli::{self, Cli};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // stderr only; stdout carries the summary line
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    match cli::run(&args) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
