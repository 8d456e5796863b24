use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Browse a paginated remote list and keep a selection of its items.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
pub struct Cli {
    /// Path to a RON config file. Defaults are used when it does not exist.
    #[arg(short, long, default_value = "roster.ron")]
    pub config: PathBuf,

    /// First page to load, overriding the config file.
    #[arg(long, value_name = "URL")]
    pub initial_url: Option<String>,

    /// Where log output goes, overriding the config file.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}
