pub mod cli;
pub mod prompt;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{ConstraintKey, RawConstraints};
#[cfg(feature = "cli")]
use crate::domain::ports::ConstraintSource;
#[cfg(feature = "cli")]
use crate::utils::validation::clean_input;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cloud-referee")]
#[command(about = "Compares AWS Bedrock and the OpenAI API against your constraints")]
pub struct CliConfig {
    /// Budget (low/medium/high)
    #[arg(long)]
    pub budget: Option<String>,

    /// Data privacy requirement (low/high)
    #[arg(long)]
    pub data_privacy: Option<String>,

    /// Scalability needs (low/high)
    #[arg(long)]
    pub scalability: Option<String>,

    /// Vendor lock-in tolerance (low/high)
    #[arg(long)]
    pub vendor_lockin: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Never prompt; unanswered constraints take their defaults
    #[arg(long)]
    pub no_input: bool,

    /// Print the prompt file ahead of the report
    #[arg(long)]
    pub preamble: bool,

    /// Prompt file location; relative paths are looked up next to the executable, then in the working directory
    #[arg(long)]
    pub prompt_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConstraintSource for CliConfig {
    fn collect(&mut self) -> crate::utils::error::Result<RawConstraints> {
        let mut raw = RawConstraints::new();
        let flags = [
            (ConstraintKey::Budget, &self.budget),
            (ConstraintKey::DataPrivacy, &self.data_privacy),
            (ConstraintKey::Scalability, &self.scalability),
            (ConstraintKey::VendorLockinTolerance, &self.vendor_lockin),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                raw.set(key, clean_input(value));
            }
        }
        Ok(raw)
    }
}
