pub mod local_storage;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
    /// Human-readable report
    Text,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "astro-insights")]
#[command(about = "Deterministic astrology insights from a name and birth date")]
pub struct CliConfig {
    #[arg(long, help = "Name of the person")]
    pub name: String,

    #[arg(long, help = "Date of birth as YYYY-MM-DD")]
    pub dob: String,

    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
