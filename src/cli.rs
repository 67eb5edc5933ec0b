use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "tabi",
    about = "Travel preference profiles - accumulate, extract, and summarize traveler preferences",
    version,
    after_help = "Logs are written to: ~/.local/share/tabi/logs/tabi.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to tabi.yaml config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply key:value profile commands and print the resulting profile
    Apply {
        /// Commands like destinations:Kyoto, budget:50000, past_trip:Osaka,2024-05-01
        #[arg(required = true)]
        commands: Vec<String>,

        /// Also infer preferences from this free-form text
        #[arg(long)]
        text: Option<String>,

        /// Output format for the profile
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Infer preferences from free-form text and print the resulting profile
    Extract {
        /// Text to scan for known destinations, activities, styles, and budget phrases
        #[arg(required = true)]
        text: Vec<String>,

        /// Output format for the profile
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the active extraction catalog
    Catalog {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Get a single config value
    Get { key: String },
}
