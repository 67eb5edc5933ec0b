//! CLI command implementations

use eyre::Result;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::profile::Profile;
use crate::profile::extract::{Catalog, default_catalog};

pub mod apply;
pub mod catalog;
pub mod completions;
pub mod config;
pub mod extract;

/// The catalog named in config, or the built-in default
pub(crate) fn active_catalog(config: &Config) -> Result<Catalog> {
    match config.catalog_path() {
        Some(path) => {
            log::info!("Loading catalog from: {}", path.display());
            Catalog::load(&path)
        }
        None => Ok(default_catalog().clone()),
    }
}

/// Print the profile in the requested format
pub(crate) fn print_profile(profile: &Profile, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(profile)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(profile)?),
        OutputFormat::Text => print!("{}", profile.render_summary()),
    }
    Ok(())
}
