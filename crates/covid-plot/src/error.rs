// File: crates/covid-plot/src/error.rs
// Summary: Error type for the read -> render -> summary pipeline.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A data row with fewer than three columns or a non-integer in columns 0..=2.
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required argument <{0}>")]
    MissingArgument(&'static str),

    #[error("render failed: {0:#}")]
    Render(anyhow::Error),

    #[error("chart window failed: {0:#}")]
    Window(anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    pub fn render(msg: impl std::fmt::Display) -> Self {
        PlotError::Render(anyhow::anyhow!("{msg}"))
    }
}
