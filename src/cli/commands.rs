use std::path::PathBuf;

use clap::Parser;

use crate::ops::filter::StatusFilter;

#[derive(Parser, Debug)]
#[command(name = "jot", about = concat!("jot v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"), version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, env = "JOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Status filter to start with
    #[arg(long, value_enum)]
    pub filter: Option<StatusFilter>,

    /// Start with an empty list (no sample tasks)
    #[arg(long)]
    pub empty: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log file path (defaults to <temp dir>/jot.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
