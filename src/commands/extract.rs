//! Extract command - infer preferences from free-form text
//!
//! Scans each text argument against the active catalog, prints what was
//! inferred, then the resulting profile. Text with no catalog matches is a
//! no-op, not an error.

use colored::*;
use eyre::Result;
use log::debug;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::profile::extract::extract_preferences;
use crate::session::SessionStore;

pub fn run(text: &[String], format: OutputFormat, config: &Config) -> Result<()> {
    let catalog = super::active_catalog(config)?;

    let mut sessions = SessionStore::new();
    let profile = sessions.get_or_create("cli");

    let mut total = 0;
    for input in text {
        let matches = extract_preferences(profile, input, &catalog);
        debug!("'{}' produced {} update(s)", input, matches.len());
        total += matches.len();
        if format == OutputFormat::Text {
            for (key, value) in &matches {
                println!("{} inferred {}: {}", "→".blue(), key.to_string().cyan(), value);
            }
        }
    }

    if format == OutputFormat::Text {
        if total == 0 {
            println!("{} no known destinations, activities, styles, or budget phrases found", "·".dimmed());
        }
        println!();
    }
    super::print_profile(profile, format)
}
