//! Settings-entry metadata for configuration front-ends
//!
//! An embedded JSON resource describes every saver group: its section name,
//! display name, description, and the keys a settings UI should offer. The
//! resource is parsed once, lazily; a malformed resource is the one
//! configuration error this crate can surface outside of file I/O.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::ConfigError;

/// The embedded settings-entry resource.
const RESOURCE: &str = include_str!("../resources/saver_settings.json");

/// UI metadata for one saver settings group.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsEntry {
    /// TOML section name, matching the field on [`crate::SaversConfig`].
    pub name: String,
    /// Human-readable saver name.
    pub display: String,
    /// One-line description shown in the settings UI.
    pub description: String,
    /// Field keys within the section.
    pub keys: Vec<String>,
}

static ENTRIES: OnceLock<Result<Vec<SettingsEntry>, String>> = OnceLock::new();

/// The settings entries for every saver group.
///
/// Parsed from the embedded resource on first call and cached for the
/// process lifetime. Fails with [`ConfigError::Entries`] if the resource
/// does not deserialize.
pub fn settings_entries() -> Result<&'static [SettingsEntry], ConfigError> {
    let cached = ENTRIES.get_or_init(|| {
        serde_json::from_str::<Vec<SettingsEntry>>(RESOURCE).map_err(|e| e.to_string())
    });
    match cached {
        Ok(entries) => Ok(entries.as_slice()),
        Err(message) => Err(ConfigError::Entries(message.clone())),
    }
}

/// Look up the entry for a saver group by its section name.
pub fn entry_for(name: &str) -> Result<Option<&'static SettingsEntry>, ConfigError> {
    Ok(settings_entries()?.iter().find(|entry| entry.name == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_parse() {
        let entries = settings_entries().unwrap();
        assert_eq!(entries.len(), 50);
    }

    #[test]
    fn test_entries_are_well_formed() {
        for entry in settings_entries().unwrap() {
            assert!(!entry.name.is_empty());
            assert!(!entry.display.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.keys.is_empty(), "entry {} has no keys", entry.name);
        }
    }

    #[test]
    fn test_entry_lookup() {
        let entry = entry_for("matrix").unwrap().expect("matrix entry");
        assert_eq!(entry.display, "Matrix");
        assert!(entry.keys.contains(&"delay".to_string()));
        assert!(entry_for("not_a_saver").unwrap().is_none());
    }
}
