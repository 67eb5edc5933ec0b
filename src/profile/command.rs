//! Textual profile-update commands
//!
//! Callers hand profile updates over as a single `key:value` string, split on
//! the first `:`. The `past_trip` value is further split on commas into
//! destination, date, and optional notes.
//!
//! # Examples
//!
//! ```text
//! destinations:京都
//! budget:50000
//! past_trip:大阪,2024-05-01,family trip
//! ```
//!
//! Malformed input never fails the caller: every problem maps to a
//! [`CommandError`] whose `Display` text is suitable to show the user, and
//! the profile is left untouched. Unknown keys are always rejected (the
//! rejection names the valid keys) rather than silently ignored.

use std::fmt;

use super::{PreferenceKey, Profile};

/// Keys accepted by [`apply_command`]
pub const VALID_KEYS: &[&str] = &["destinations", "activities", "budget", "travel_style", "past_trip"];

/// Rejections produced by [`apply_command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The `key:value` or `destination,date` convention was violated
    Malformed { detail: &'static str },
    /// Key not in [`VALID_KEYS`]
    InvalidKey { key: String },
    /// Budget value not a non-negative integer
    InvalidBudget { value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Malformed { detail } => {
                write!(f, "Malformed command ({}). Use key:value, e.g. destinations:Kyoto", detail)
            }
            CommandError::InvalidKey { key } => {
                write!(f, "Unknown key '{}'. Valid keys: {}", key, VALID_KEYS.join(", "))
            }
            CommandError::InvalidBudget { value } => {
                write!(f, "Budget must be a non-negative integer, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse and apply one `key:value` command
///
/// Returns a confirmation message on success. On error the profile is
/// unchanged; callers are expected to show the error text and carry on.
pub fn apply_command(profile: &mut Profile, input: &str) -> Result<String, CommandError> {
    let Some((key, value)) = input.split_once(':') else {
        return Err(CommandError::Malformed {
            detail: "missing ':' between key and value",
        });
    };
    let key = key.trim();
    let value = value.trim();

    if value.is_empty() {
        return Err(CommandError::Malformed { detail: "missing value" });
    }

    if key == "past_trip" {
        return apply_past_trip(profile, value);
    }

    match PreferenceKey::from_name(key) {
        Some(PreferenceKey::Destinations) => {
            profile.add_destination(value);
            Ok(format!("Updated destinations with '{}'.", value))
        }
        Some(PreferenceKey::Activities) => {
            profile.add_activity(value);
            Ok(format!("Updated activities with '{}'.", value))
        }
        Some(PreferenceKey::Budget) => {
            let yen: u64 = value
                .parse()
                .map_err(|_| CommandError::InvalidBudget { value: value.to_string() })?;
            profile.set_budget(yen);
            Ok(format!("Updated budget to {} yen.", yen))
        }
        Some(PreferenceKey::TravelStyle) => {
            profile.set_travel_style(value);
            Ok(format!("Updated travel style to '{}'.", value))
        }
        None => Err(CommandError::InvalidKey { key: key.to_string() }),
    }
}

/// Handle `past_trip:destination,date[,notes]`
fn apply_past_trip(profile: &mut Profile, value: &str) -> Result<String, CommandError> {
    let Some((destination, rest)) = value.split_once(',') else {
        return Err(CommandError::Malformed {
            detail: "past_trip needs 'destination,date'",
        });
    };
    let destination = destination.trim();
    let (date, notes) = match rest.split_once(',') {
        Some((date, notes)) => (date.trim(), Some(notes.trim())),
        None => (rest.trim(), None),
    };

    profile
        .add_past_trip(destination, date, notes.filter(|n| !n.is_empty()))
        .map_err(|_| CommandError::Malformed {
            detail: "past_trip needs a non-empty destination and date",
        })?;

    Ok(format!("Recorded past trip to {} ({}).", destination, date))
}
