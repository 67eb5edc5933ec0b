//! Traveler preference profile
//!
//! Holds one user's accumulated travel preferences (favourite destinations,
//! activities, budget, travel style) plus an append-only history of past
//! trips, and renders the whole record as a human-readable summary.
//!
//! Destinations and activities are insertion-ordered sets: adding the same
//! entry twice keeps a single copy in its original position. Budget and
//! travel style are last-write-wins scalars. Past trips are never deduped.
//!
//! A profile belongs to exactly one session and lives only as long as that
//! session does. Nothing here is persisted or synchronized; see
//! [`crate::session`] for ownership rules.

pub mod command;
pub mod extract;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The recognized preference fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Destinations,
    Activities,
    Budget,
    TravelStyle,
}

impl PreferenceKey {
    /// Field name as it appears in textual commands and summaries
    pub fn name(&self) -> &'static str {
        match self {
            PreferenceKey::Destinations => "destinations",
            PreferenceKey::Activities => "activities",
            PreferenceKey::Budget => "budget",
            PreferenceKey::TravelStyle => "travel_style",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "destinations" => Some(PreferenceKey::Destinations),
            "activities" => Some(PreferenceKey::Activities),
            "budget" => Some(PreferenceKey::Budget),
            "travel_style" => Some(PreferenceKey::TravelStyle),
            _ => None,
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value supplied to [`Profile::update_preference`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceValue {
    /// For `destinations`, `activities`, and `travel_style`
    Text(String),
    /// For `budget`, in yen
    Amount(u64),
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceValue::Text(s) => write!(f, "{}", s),
            PreferenceValue::Amount(n) => write!(f, "{}", n),
        }
    }
}

/// Errors from typed profile mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Value type does not match the key (e.g. text for `budget`)
    TypeMismatch {
        key: PreferenceKey,
        expected: &'static str,
    },
    /// A required field was empty
    EmptyField { field: &'static str },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::TypeMismatch { key, expected } => {
                write!(f, "'{}' expects {}", key, expected)
            }
            ProfileError::EmptyField { field } => {
                write!(f, "'{}' must not be empty", field)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Current travel preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Favourite destinations, insertion order, no duplicates
    pub destinations: IndexSet<String>,
    /// Favourite activities, insertion order, no duplicates
    pub activities: IndexSet<String>,
    /// Budget in yen, last write wins
    pub budget: Option<u64>,
    /// Travel style (e.g. luxury, budget, adventure), last write wins
    pub travel_style: Option<String>,
}

/// A past trip, recorded as given — no date validation, no dedup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastTrip {
    pub destination: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One user's complete profile: preferences plus trip history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub preferences: Preferences,
    pub past_trips: Vec<PastTrip>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a favourite destination. Returns false if it was already present.
    pub fn add_destination(&mut self, name: impl Into<String>) -> bool {
        self.preferences.destinations.insert(name.into())
    }

    /// Add a favourite activity. Returns false if it was already present.
    pub fn add_activity(&mut self, name: impl Into<String>) -> bool {
        self.preferences.activities.insert(name.into())
    }

    /// Set the budget in yen, replacing any previous value
    pub fn set_budget(&mut self, yen: u64) {
        self.preferences.budget = Some(yen);
    }

    /// Set the travel style, replacing any previous value
    pub fn set_travel_style(&mut self, style: impl Into<String>) {
        self.preferences.travel_style = Some(style.into());
    }

    /// Update one preference field by key
    ///
    /// List-valued keys append the value unless it is already present;
    /// scalar keys overwrite unconditionally. A value whose type does not
    /// match the key is rejected and the profile is left unchanged.
    pub fn update_preference(
        &mut self,
        key: PreferenceKey,
        value: PreferenceValue,
    ) -> Result<(), ProfileError> {
        match (key, value) {
            (PreferenceKey::Destinations, PreferenceValue::Text(v)) => {
                self.add_destination(v);
            }
            (PreferenceKey::Activities, PreferenceValue::Text(v)) => {
                self.add_activity(v);
            }
            (PreferenceKey::Budget, PreferenceValue::Amount(v)) => self.set_budget(v),
            (PreferenceKey::TravelStyle, PreferenceValue::Text(v)) => self.set_travel_style(v),
            (PreferenceKey::Budget, PreferenceValue::Text(_)) => {
                return Err(ProfileError::TypeMismatch {
                    key,
                    expected: "a non-negative integer",
                });
            }
            (_, PreferenceValue::Amount(_)) => {
                return Err(ProfileError::TypeMismatch {
                    key,
                    expected: "a string",
                });
            }
        }
        Ok(())
    }

    /// Record a past trip
    ///
    /// Destination and date are required; notes are optional. Records are
    /// kept in call order.
    pub fn add_past_trip(
        &mut self,
        destination: &str,
        date: &str,
        notes: Option<&str>,
    ) -> Result<(), ProfileError> {
        if destination.is_empty() {
            return Err(ProfileError::EmptyField { field: "destination" });
        }
        if date.is_empty() {
            return Err(ProfileError::EmptyField { field: "date" });
        }
        self.past_trips.push(PastTrip {
            destination: destination.to_string(),
            date: date.to_string(),
            notes: notes.map(|n| n.to_string()),
        });
        Ok(())
    }

    /// Render the profile as human-readable text
    ///
    /// A header line, then a preferences block listing only populated fields
    /// (destinations, activities, budget, travel_style, in that order), then
    /// a past-trips block that is omitted entirely when there are no trips.
    /// Trips render as `destination (date)` with a `: notes` suffix when
    /// notes are present. Pure function of current state.
    pub fn render_summary(&self) -> String {
        let mut out = String::from("User profile:\n");

        out.push_str("Preferences:\n");
        let prefs = &self.preferences;
        if !prefs.destinations.is_empty() {
            out.push_str(&format!("  destinations: {}\n", join(&prefs.destinations)));
        }
        if !prefs.activities.is_empty() {
            out.push_str(&format!("  activities: {}\n", join(&prefs.activities)));
        }
        if let Some(budget) = prefs.budget {
            out.push_str(&format!("  budget: {} yen\n", budget));
        }
        if let Some(style) = &prefs.travel_style {
            out.push_str(&format!("  travel_style: {}\n", style));
        }

        if !self.past_trips.is_empty() {
            out.push_str("Past trips:\n");
            for trip in &self.past_trips {
                out.push_str(&format!("  - {} ({})", trip.destination, trip.date));
                if let Some(notes) = &trip.notes {
                    out.push_str(&format!(": {}", notes));
                }
                out.push('\n');
            }
        }

        out
    }
}

fn join(set: &IndexSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_destination_idempotent() {
        let mut profile = Profile::new();
        assert!(profile.add_destination("Kyoto"));
        assert!(!profile.add_destination("Kyoto"));
        assert_eq!(profile.preferences.destinations.len(), 1);
    }

    #[test]
    fn test_activities_preserve_insertion_order() {
        let mut profile = Profile::new();
        profile.add_activity("A");
        profile.add_activity("B");
        profile.add_activity("A");

        let summary = profile.render_summary();
        assert!(summary.contains("activities: A, B"));
    }

    #[test]
    fn test_budget_last_write_wins() {
        let mut profile = Profile::new();
        profile
            .update_preference(PreferenceKey::Budget, PreferenceValue::Amount(1000))
            .unwrap();
        profile
            .update_preference(PreferenceKey::Budget, PreferenceValue::Amount(2000))
            .unwrap();
        assert_eq!(profile.preferences.budget, Some(2000));
    }

    #[test]
    fn test_travel_style_overwrites() {
        let mut profile = Profile::new();
        profile.set_travel_style("luxury");
        profile.set_travel_style("budget");
        assert_eq!(profile.preferences.travel_style.as_deref(), Some("budget"));
    }

    #[test]
    fn test_update_preference_rejects_type_mismatch() {
        let mut profile = Profile::new();
        let err = profile
            .update_preference(PreferenceKey::Budget, PreferenceValue::Text("lots".into()))
            .unwrap_err();
        assert_eq!(
            err,
            ProfileError::TypeMismatch {
                key: PreferenceKey::Budget,
                expected: "a non-negative integer"
            }
        );
        assert_eq!(profile, Profile::new());

        let err = profile
            .update_preference(PreferenceKey::Destinations, PreferenceValue::Amount(3))
            .unwrap_err();
        assert!(err.to_string().contains("destinations"));
    }

    #[test]
    fn test_fresh_profile_summary_omits_empty_fields() {
        let profile = Profile::new();
        let summary = profile.render_summary();
        assert!(summary.starts_with("User profile:"));
        assert!(!summary.contains("destinations"));
        assert!(!summary.contains("budget"));
        assert!(!summary.contains("Past trips"));
    }

    #[test]
    fn test_summary_field_order() {
        let mut profile = Profile::new();
        profile.set_travel_style("relaxed");
        profile.set_budget(50000);
        profile.add_activity("hiking");
        profile.add_destination("Sapporo");

        let summary = profile.render_summary();
        let dest = summary.find("destinations:").unwrap();
        let act = summary.find("activities:").unwrap();
        let budget = summary.find("budget:").unwrap();
        let style = summary.find("travel_style:").unwrap();
        assert!(dest < act && act < budget && budget < style);
    }

    #[test]
    fn test_past_trip_with_notes() {
        let mut profile = Profile::new();
        profile
            .add_past_trip("Osaka", "2024-05-01", Some("family trip"))
            .unwrap();

        let summary = profile.render_summary();
        assert!(summary.contains("  - Osaka (2024-05-01): family trip\n"));
    }

    #[test]
    fn test_past_trip_without_notes_has_no_colon_suffix() {
        let mut profile = Profile::new();
        profile.add_past_trip("Osaka", "2024-05-01", None).unwrap();

        let summary = profile.render_summary();
        assert!(summary.contains("  - Osaka (2024-05-01)\n"));
    }

    #[test]
    fn test_past_trips_keep_call_order_and_duplicates() {
        let mut profile = Profile::new();
        profile.add_past_trip("Nara", "2023-01-01", None).unwrap();
        profile.add_past_trip("Nara", "2023-01-01", None).unwrap();
        assert_eq!(profile.past_trips.len(), 2);
    }

    #[test]
    fn test_past_trip_requires_destination_and_date() {
        let mut profile = Profile::new();
        assert_eq!(
            profile.add_past_trip("", "2024-01-01", None),
            Err(ProfileError::EmptyField { field: "destination" })
        );
        assert_eq!(
            profile.add_past_trip("Kobe", "", None),
            Err(ProfileError::EmptyField { field: "date" })
        );
        assert!(profile.past_trips.is_empty());
    }

    #[test]
    fn test_preference_key_round_trip() {
        for key in [
            PreferenceKey::Destinations,
            PreferenceKey::Activities,
            PreferenceKey::Budget,
            PreferenceKey::TravelStyle,
        ] {
            assert_eq!(PreferenceKey::from_name(key.name()), Some(key));
        }
        assert_eq!(PreferenceKey::from_name("past_trip"), None);
    }
}
