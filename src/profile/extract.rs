//! Free-text preference extraction
//!
//! Best-effort inference of profile updates from unstructured input: the
//! text is scanned for substring matches against a catalog of known
//! destination names, activity names, and travel-style trigger words, plus a
//! currency pattern for budgets: with the 万 marker the captured number is in
//! units of 10,000 yen ("予算5万円" → 50000), without it in units of 1,000
//! yen ("予算30円" → 30000).
//!
//! Matching is substring containment, not tokenization. False positives are
//! expected and acceptable (a place name inside an unrelated word still
//! counts). Every match applies its own update; input with no matches leaves
//! the profile untouched.

use eyre::{Context, Result};
use indexmap::IndexMap;
use lazy_regex::regex_captures;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{PreferenceKey, PreferenceValue, Profile};

/// Catalog of trigger terms driving extraction
///
/// Destinations and activities are matched literally; each travel style maps
/// a canonical name to the trigger substrings that select it. Loadable from
/// YAML so deployments can localize or extend the built-in tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub destinations: Vec<String>,
    pub activities: Vec<String>,
    pub styles: IndexMap<String, Vec<String>>,
}

impl Default for Catalog {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let mut styles = IndexMap::new();
        styles.insert("贅沢".to_string(), owned(&["贅沢", "高級", "ラグジュアリー"]));
        styles.insert("節約".to_string(), owned(&["節約", "安い", "格安", "バジェット"]));
        styles.insert("アドベンチャー".to_string(), owned(&["アドベンチャー", "冒険", "アクティブ"]));
        styles.insert("リラックス".to_string(), owned(&["リラックス", "のんびり", "ゆっくり"]));
        styles.insert("文化体験".to_string(), owned(&["文化", "歴史", "伝統"]));

        Self {
            destinations: owned(&[
                "東京", "大阪", "京都", "札幌", "那覇", "沖縄", "北海道", "福岡", "名古屋", "広島",
            ]),
            activities: owned(&[
                "観光", "グルメ", "ショッピング", "温泉", "ハイキング", "ビーチ", "美術館", "博物館",
            ]),
            styles,
        }
    }
}

static DEFAULT: Lazy<Catalog> = Lazy::new(Catalog::default);

/// The built-in catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT
}

impl Catalog {
    /// Load a catalog from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        Ok(catalog)
    }
}

/// Scan input for catalog matches without touching any profile
///
/// Pure function: returns the updates that the input implies, in catalog
/// order (destinations, activities, budget, styles).
pub fn scan(input: &str, catalog: &Catalog) -> Vec<(PreferenceKey, PreferenceValue)> {
    let mut found = Vec::new();

    for dest in &catalog.destinations {
        if input.contains(dest.as_str()) {
            found.push((
                PreferenceKey::Destinations,
                PreferenceValue::Text(dest.clone()),
            ));
        }
    }

    for activity in &catalog.activities {
        if input.contains(activity.as_str()) {
            found.push((
                PreferenceKey::Activities,
                PreferenceValue::Text(activity.clone()),
            ));
        }
    }

    if let Some(yen) = scan_budget(input) {
        found.push((PreferenceKey::Budget, PreferenceValue::Amount(yen)));
    }

    for (style, triggers) in &catalog.styles {
        if triggers.iter().any(|t| input.contains(t.as_str())) {
            found.push((
                PreferenceKey::TravelStyle,
                PreferenceValue::Text(style.clone()),
            ));
        }
    }

    found
}

/// Extract a budget from a `予算N万円` / `予算N円` phrase
///
/// With the 万 marker the number is in units of 10,000 yen; without it, in
/// units of 1,000 yen.
fn scan_budget(input: &str) -> Option<u64> {
    let (_, digits, man) = regex_captures!(r"予算は?(\d+)(万)?円", input)?;
    let amount: u64 = digits.parse().ok()?;
    Some(if man.is_empty() { amount * 1_000 } else { amount * 10_000 })
}

/// Scan input and apply every match to the profile
///
/// Returns the applied updates so callers can report what was inferred.
pub fn extract_preferences(
    profile: &mut Profile,
    input: &str,
    catalog: &Catalog,
) -> Vec<(PreferenceKey, PreferenceValue)> {
    let matches = scan(input, catalog);
    for (key, value) in &matches {
        match (key, value) {
            (PreferenceKey::Destinations, PreferenceValue::Text(v)) => {
                profile.add_destination(v.clone());
            }
            (PreferenceKey::Activities, PreferenceValue::Text(v)) => {
                profile.add_activity(v.clone());
            }
            (PreferenceKey::Budget, PreferenceValue::Amount(v)) => profile.set_budget(*v),
            (PreferenceKey::TravelStyle, PreferenceValue::Text(v)) => {
                profile.set_travel_style(v.clone());
            }
            // scan only produces the pairings above
            _ => {}
        }
    }
    matches
}
