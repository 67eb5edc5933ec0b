//! Apply command - structured profile updates
//!
//! Applies `key:value` commands in order, printing a confirmation or
//! rejection for each, then the resulting profile. Rejections go to stderr
//! and never abort the run; the remaining commands still apply.

use colored::*;
use eyre::Result;
use log::{debug, warn};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::profile::command::apply_command;
use crate::profile::extract::extract_preferences;
use crate::session::SessionStore;

pub fn run(commands: &[String], text: Option<&str>, format: OutputFormat, config: &Config) -> Result<()> {
    let catalog = super::active_catalog(config)?;

    let mut sessions = SessionStore::new();
    let profile = sessions.get_or_create("cli");

    for command in commands {
        match apply_command(profile, command) {
            Ok(msg) => {
                debug!("applied command: {}", command);
                if format == OutputFormat::Text {
                    println!("{} {}", "✓".green(), msg);
                }
            }
            Err(err) => {
                warn!("rejected command '{}': {}", command, err);
                eprintln!("{} {}", "✗".red(), err);
            }
        }
    }

    if let Some(text) = text {
        let matches = extract_preferences(profile, text, &catalog);
        debug!("extracted {} preference update(s) from text", matches.len());
        if format == OutputFormat::Text {
            for (key, value) in &matches {
                println!("{} inferred {}: {}", "→".blue(), key.to_string().cyan(), value);
            }
        }
    }

    if format == OutputFormat::Text {
        println!();
    }
    super::print_profile(profile, format)
}
