use serde::Deserialize;

/// How many synonyms of a meaning are surfaced to the render layer.
pub const DISPLAYED_SYNONYMS: usize = 5;

/// One dictionary entry as returned by the definition service.
///
/// The upstream body is a JSON array of these; only the first element is
/// consumed. Optional and missing fields are tolerated, sequence fields
/// default to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Part-of-speech grouping. Received order is display order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl WordEntry {
    /// First phonetic with a non-empty audio URL, if any.
    pub fn primary_audio(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|url| !url.is_empty())
    }

    /// Phonetic text for the word header: the top-level `phonetic` when
    /// present and non-empty, otherwise the first phonetic entry with text.
    pub fn primary_phonetic(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .filter(|text| !text.is_empty())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .find(|text| !text.is_empty())
            })
    }
}

impl Meaning {
    /// Synonyms shown for this meaning: the first five, original order.
    /// The remainder is not surfaced anywhere.
    pub fn display_synonyms(&self) -> &[String] {
        let shown = self.synonyms.len().min(DISPLAYED_SYNONYMS);
        &self.synonyms[..shown]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT_BODY: &str = r#"[{
        "word": "cat",
        "phonetics": [
            { "text": "/kæt/" },
            { "audio": "http://x/a.mp3" }
        ],
        "meanings": [{
            "partOfSpeech": "noun",
            "definitions": [{ "definition": "A small domesticated feline." }],
            "synonyms": ["feline", "kitty", "tabby", "moggy", "puss", "tom"],
            "antonyms": []
        }],
        "sourceUrls": ["http://en.wiktionary.org/wiki/cat"]
    }]"#;

    fn cat() -> WordEntry {
        let mut entries: Vec<WordEntry> = serde_json::from_str(CAT_BODY).unwrap();
        entries.remove(0)
    }

    #[test]
    fn decodes_wire_names_and_defaults() {
        let entry = cat();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.phonetic, None);
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(entry.source_urls, ["http://en.wiktionary.org/wiki/cat"]);
        assert!(entry.meanings[0].antonyms.is_empty());
    }

    #[test]
    fn primary_audio_skips_entries_without_audio() {
        let entry = cat();
        assert_eq!(entry.primary_audio(), Some("http://x/a.mp3"));
    }

    #[test]
    fn primary_phonetic_falls_back_to_first_text() {
        let entry = cat();
        assert_eq!(entry.primary_phonetic(), Some("/kæt/"));
    }

    #[test]
    fn primary_phonetic_prefers_top_level_field() {
        let mut entry = cat();
        entry.phonetic = Some("/kat/".to_string());
        assert_eq!(entry.primary_phonetic(), Some("/kat/"));

        // An empty top-level value does not shadow the entries.
        entry.phonetic = Some(String::new());
        assert_eq!(entry.primary_phonetic(), Some("/kæt/"));
    }

    #[test]
    fn display_synonyms_caps_at_five_in_order() {
        let entry = cat();
        assert_eq!(
            entry.meanings[0].display_synonyms(),
            ["feline", "kitty", "tabby", "moggy", "puss"]
        );
    }

    #[test]
    fn display_synonyms_short_list_unchanged() {
        let mut entry = cat();
        entry.meanings[0].synonyms.truncate(2);
        assert_eq!(entry.meanings[0].display_synonyms(), ["feline", "kitty"]);
    }

    #[test]
    fn no_phonetics_yields_no_projections() {
        let entry: WordEntry = serde_json::from_str(r#"{ "word": "dog" }"#).unwrap();
        assert_eq!(entry.primary_audio(), None);
        assert_eq!(entry.primary_phonetic(), None);
    }
}
