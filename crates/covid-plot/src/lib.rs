// File: crates/covid-plot/src/lib.rs
// Summary: Covid cases/deaths plotting pipeline: CSV reader, chart builder, CLI driver.

pub mod cli;
pub mod config;
pub mod error;
pub mod plot;
pub mod reader;

pub use config::{Output, PlotConfig, Style};
pub use error::{PlotError, Result};
pub use reader::{read_dataset, read_dataset_from, Dataset, Record};
