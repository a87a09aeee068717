// File: crates/demo/src/cli.rs
// Summary: Command-line arguments for the demo binary.

use std::path::PathBuf;

use clap::Parser;

/// Render vitals charts (pulse and breathing pleth, rates, ...) to PNG files.
#[derive(Parser, Debug)]
#[command(name = "vitals-demo")]
#[command(version)]
#[command(about = "Renders vitals charts to PNG files", long_about = None)]
pub struct Cli {
    /// Metrics dump (.json) or `time,value` table (.csv); random heart-rate data when omitted
    pub input: Option<PathBuf>,

    /// Demo configuration file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
