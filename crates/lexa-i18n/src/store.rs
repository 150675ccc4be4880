use std::collections::HashMap;

use crate::table::{Direction, TranslationTable};

/// The language every unknown code degrades to, when configured.
const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("could not parse locale data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Holds the configured translation tables and the active language code.
///
/// Selection is total: an unknown code falls back to `"en"` when configured,
/// otherwise to an empty left-to-right table. Lookups never fail; a missing
/// key reads as the empty string.
pub struct LocaleStore {
    tables: HashMap<String, TranslationTable>,
    active: String,
    empty: TranslationTable,
}

impl LocaleStore {
    /// Build a store from the locale tables bundled into the binary.
    pub fn embedded(initial_language: &str) -> Result<Self, LocaleError> {
        let json = include_str!("../locales/en.json");
        Self::from_json(json, initial_language)
    }

    /// Parse `{ "<code>": { "dir": ..., "values": ... }, ... }` locale data.
    pub fn from_json(json: &str, initial_language: &str) -> Result<Self, LocaleError> {
        let tables: HashMap<String, TranslationTable> = serde_json::from_str(json)?;
        tracing::info!("Loaded {} locale table(s)", tables.len());
        Ok(Self::new(tables, initial_language))
    }

    pub fn new(tables: HashMap<String, TranslationTable>, initial_language: &str) -> Self {
        let mut store = Self {
            tables,
            active: String::new(),
            empty: TranslationTable::default(),
        };
        store.set_active_language(initial_language);
        store
    }

    /// The configured language codes, sorted for stable iteration.
    pub fn available_languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.tables.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn active_language(&self) -> &str {
        &self.active
    }

    /// Switch the active language. Never fails: unknown codes degrade to the
    /// fallback language, or to an empty table when even that is missing.
    /// Re-selecting the active code is a no-op.
    pub fn set_active_language(&mut self, code: &str) {
        if code == self.active {
            return;
        }

        if self.tables.contains_key(code) {
            self.active = code.to_string();
        } else if self.tables.contains_key(FALLBACK_LANGUAGE) {
            tracing::debug!("no locale table for '{code}', falling back to '{FALLBACK_LANGUAGE}'");
            self.active = FALLBACK_LANGUAGE.to_string();
        } else {
            tracing::debug!("no locale table for '{code}' and no fallback configured");
            self.active = code.to_string();
        }
    }

    /// Localized string for `key`, or `""` when the active table has none.
    /// An empty result means "no translation available", not an error.
    pub fn translate(&self, key: &str) -> String {
        self.active_table().values.get(key).cloned().unwrap_or_default()
    }

    pub fn direction(&self) -> Direction {
        self.active_table().direction
    }

    fn active_table(&self) -> &TranslationTable {
        self.tables.get(&self.active).unwrap_or(&self.empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_only() -> LocaleStore {
        LocaleStore::from_json(
            r#"{ "en": { "dir": "ltr", "values": { "app.title": "Dictionary" } } }"#,
            "en",
        )
        .unwrap()
    }

    #[test]
    fn embedded_tables_parse_and_expose_english() {
        let store = LocaleStore::embedded("en").unwrap();
        assert_eq!(store.available_languages(), ["en"]);
        assert_eq!(store.active_language(), "en");
        assert_eq!(store.translate("app.title"), "Dictionary");
        assert_eq!(store.direction(), Direction::Ltr);
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        let mut store = en_only();
        store.set_active_language("xx");
        assert_eq!(store.active_language(), "en");
        assert_eq!(store.translate("app.title"), "Dictionary");
    }

    #[test]
    fn missing_key_reads_as_empty_string() {
        let store = en_only();
        assert_eq!(store.translate("missingKey"), "");
    }

    #[test]
    fn no_fallback_table_degrades_to_empty_ltr() {
        let mut store = LocaleStore::from_json(
            r#"{ "ar": { "dir": "rtl", "values": { "app.title": "قاموس" } } }"#,
            "ar",
        )
        .unwrap();
        assert_eq!(store.direction(), Direction::Rtl);

        store.set_active_language("xx");
        assert_eq!(store.active_language(), "xx");
        assert_eq!(store.translate("app.title"), "");
        assert_eq!(store.direction(), Direction::Ltr);
    }

    #[test]
    fn reselecting_active_language_changes_nothing() {
        let mut store = en_only();
        store.set_active_language("en");
        store.set_active_language("en");
        assert_eq!(store.active_language(), "en");
        assert_eq!(store.translate("app.title"), "Dictionary");
    }

    #[test]
    fn initial_language_goes_through_the_same_fallback() {
        let store = LocaleStore::from_json(
            r#"{ "en": { "dir": "ltr", "values": {} } }"#,
            "xx",
        )
        .unwrap();
        assert_eq!(store.active_language(), "en");
    }
}
