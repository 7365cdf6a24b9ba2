//! Command-line argument parsing for the headless grid driver
//!
//! Supports:
//! - Seeding an in-memory store from a JSON file
//! - Replaying a YAML script of grid actions
//! - An explicit config file

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;

/// Drive a leads grid against an in-memory store and print the result
#[derive(Parser, Debug)]
#[command(name = "lead-grid", version, about = "Headless leads grid driver")]
pub struct CliArgs {
    /// JSON array of leads to seed the store with
    #[arg(long, value_name = "FILE")]
    pub seed: PathBuf,

    /// YAML list of actions to replay after the initial load
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Config file (defaults to ~/.config/lead-grid/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Select the whole grid before printing
    #[arg(long)]
    pub select_all: bool,
}

impl CliArgs {
    /// Resolve the grid config from `--config` or the default location
    pub fn grid_config(&self) -> anyhow::Result<GridConfig> {
        match &self.config {
            Some(path) => GridConfig::load_from(path),
            None => Ok(GridConfig::load()),
        }
    }
}
