//! Catalog command - show the active extraction tables

use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::config::Config;

pub fn run(format: OutputFormat, config: &Config) -> Result<()> {
    let catalog = super::active_catalog(config)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&catalog)?);
        }
        OutputFormat::Text => {
            println!("{}", "Extraction catalog".bold());
            println!();

            println!("{}:", "destinations".cyan());
            println!("  {}", catalog.destinations.join(", "));
            println!();

            println!("{}:", "activities".cyan());
            println!("  {}", catalog.activities.join(", "));
            println!();

            println!("{}:", "styles".cyan());
            for (style, triggers) in &catalog.styles {
                println!("  {}: {}", style, triggers.join(", "));
            }
        }
    }

    Ok(())
}
