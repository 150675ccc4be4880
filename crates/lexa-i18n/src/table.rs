use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Text-flow orientation of a language, consumed by the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Per-language translation table: a direction flag plus key → localized
/// string values. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationTable {
    #[serde(default, rename = "dir")]
    pub direction: Direction,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_decodes_lowercase_wire_values() {
        let table: TranslationTable =
            serde_json::from_str(r#"{ "dir": "rtl", "values": { "app.title": "قاموس" } }"#)
                .unwrap();
        assert_eq!(table.direction, Direction::Rtl);
        assert_eq!(table.values["app.title"], "قاموس");
    }

    #[test]
    fn missing_fields_default_to_ltr_and_empty() {
        let table: TranslationTable = serde_json::from_str("{}").unwrap();
        assert_eq!(table.direction, Direction::Ltr);
        assert!(table.values.is_empty());
    }
}
