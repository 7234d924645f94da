//! Utility functions for string processing.

/// Split a free-text query into lowercase, non-empty terms.
///
/// Whitespace-only input yields no terms. Duplicates are kept: each copy of
/// a repeated term is scored on its own.
///
/// - `"Mouse  SPEED"` → `["mouse", "speed"]`
/// - `"   "` → `[]`
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Display name derived from a file stem when an entry has no `Name=`.
///
/// First character upper-cased, the rest lower-cased, dashes become spaces:
/// `"gnome-disk-UTILITY"` → `"Gnome disk utility"`.
pub fn default_display_name(stem: &str) -> String {
    let mut chars = stem.chars();
    let capitalized = match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    };
    capitalized.replace('-', " ")
}

/// Module suffix for a sub-setting: lowercase, spaces become dashes.
///
/// `"Alt-Tab Behavior"` → `"alt-tab-behavior"`.
pub fn setting_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
