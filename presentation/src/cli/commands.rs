//! CLI command definitions

use clap::{Parser, ValueEnum};
use facts_application::SourceStep;
use std::path::PathBuf;

/// Output format for resolved facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered cards with colors
    Cards,
    /// One line per fact
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormat> for facts_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Cards => Self::Cards,
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for country-facts
#[derive(Parser, Debug)]
#[command(name = "country-facts")]
#[command(author, version, about = "Interesting facts about any country")]
#[command(long_about = r#"
Country Facts shows a few interesting facts about a country.

Facts come from the first source in the chain that has them:
1. Curated:  a small hand-written table, no network
2. Remote:   a language model (self-hosted backend or a hosted endpoint)
3. Template: synthesized facts, always available

Configuration files are loaded from (in priority order):
1. COUNTRY_FACTS_* environment variables
2. --config <path>              Explicit config file
3. ./country-facts.toml         Project-level config
4. ~/.config/country-facts/config.toml   Global config

Example:
  country-facts Japan
  country-facts "New Zealand" --ask "What language do they speak?"
  country-facts --chat
  country-facts --token hf_xxx --enable-remote --save-settings
"#)]
pub struct Cli {
    /// Country to look up (not required in chat mode)
    #[arg(value_name = "COUNTRY")]
    pub country: Vec<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Ask a follow-up question about the country
    #[arg(short, long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Source order, comma separated (curated,remote,template)
    #[arg(long, value_name = "STEPS", value_delimiter = ',')]
    pub order: Vec<SourceStep>,

    /// Remote source kind (self_hosted, hosted_inference, chat_completion, none)
    #[arg(long, value_name = "KIND")]
    pub remote: Option<String>,

    /// Seed for template synthesis (reproducible output)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// API token for hosted endpoints (direct mode)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Enable direct remote-model mode
    #[arg(long, conflicts_with = "disable_remote")]
    pub enable_remote: bool,

    /// Disable direct remote-model mode
    #[arg(long)]
    pub disable_remote: bool,

    /// Persist --token / --enable-remote / --disable-remote
    #[arg(long)]
    pub save_settings: bool,

    /// Remove persisted settings and exit
    #[arg(long, conflicts_with = "save_settings")]
    pub clear_settings: bool,

    /// Check the self-hosted backend and exit
    #[arg(long)]
    pub health: bool,

    /// Print country names matching a prefix and exit
    #[arg(long, value_name = "PREFIX")]
    pub suggest: Option<String>,
}

impl Cli {
    /// Country words joined with single spaces, if any were given
    pub fn country_name(&self) -> Option<String> {
        let name = self
            .country
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }

    /// Direct-mode switch requested on the command line
    pub fn remote_switch(&self) -> Option<bool> {
        if self.enable_remote {
            Some(true)
        } else if self.disable_remote {
            Some(false)
        } else {
            None
        }
    }
}
