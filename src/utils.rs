//! Small helpers shared by the stores and the binary.

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Unique-enough key for cache-busting fetches: the current time in epoch millis.
pub fn async_key() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Upper-cases the first character of every space-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random (v4) UUID in hyphenated form.
pub fn uuid4() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fully independent copy of `value`.
pub fn deep_copy<T: Clone>(value: &T) -> T {
    value.clone()
}

/// Light/dark theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DarkMode {
    is_dark: bool,
}

impl DarkMode {
    pub fn new(is_dark: bool) -> Self {
        Self { is_dark }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Flips the preference and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.is_dark
    }
}

/// Serializes `data` as JSON into the file at `path`, replacing it if present.
pub fn download_as_json<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", path.display(), e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, data)?;
    writer.flush()?;
    tracing::debug!("Wrote JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("the quick brown fox"), "The Quick Brown Fox");
        assert_eq!(title_case("already Upper"), "Already Upper");
        assert_eq!(title_case("double  space"), "Double  Space");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn uuid4_is_version_four() {
        let id = uuid4();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(id, uuid4());
    }

    #[test]
    fn async_key_is_numeric() {
        assert!(async_key().parse::<i64>().is_ok());
    }

    #[test]
    fn deep_copy_is_equal_but_distinct() {
        let mut original: HashMap<String, Vec<chrono::DateTime<Utc>>> = HashMap::new();
        original.insert(
            "made".to_string(),
            vec![Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()],
        );

        let copy = deep_copy(&original);
        assert_eq!(copy, original);
        assert_ne!(copy["made"].as_ptr(), original["made"].as_ptr());

        let mut copy = copy;
        copy.get_mut("made").unwrap().clear();
        assert_eq!(original["made"].len(), 1);
        assert_eq!(deep_copy(&copy), copy);
    }

    #[test]
    fn deep_copy_passes_primitives_through() {
        assert_eq!(deep_copy(&7), 7);
        assert_eq!(deep_copy(&json!(null)), json!(null));
    }

    #[test]
    fn dark_mode_toggles() {
        let mut mode = DarkMode::default();
        assert!(mode.toggle());
        assert!(!mode.toggle());
        assert!(!mode.is_dark());
    }

    #[test]
    fn download_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");

        download_as_json(&json!({"name": "Soup"}), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({"name": "Soup"}));
    }
}
