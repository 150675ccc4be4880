//! Text projection of lookup state and chrome, mirroring the service's web
//! page: word header, phonetic, meanings with quoted examples, up to five
//! synonyms per meaning, source links.

use lexa_core::LookupState;
use lexa_i18n::{Direction, LocaleStore};
use lexa_types::WordEntry;

const PAGE_WIDTH: usize = 72;

/// Header block: title, language selector row, search hint.
pub fn render_chrome(locales: &LocaleStore) -> String {
    let dir = locales.direction();
    let languages = locales
        .available_languages()
        .into_iter()
        .map(|code| {
            if code == locales.active_language() {
                format!("[{code}]")
            } else {
                code
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    push_line(&mut out, &locales.translate("app.title"), dir);
    push_line(&mut out, &languages, dir);
    push_line(&mut out, &locales.translate("search.placeholder"), dir);
    out
}

/// Project a lookup state to displayable text. `Idle` renders nothing.
pub fn render_state(state: &LookupState, locales: &LocaleStore) -> Option<String> {
    match state {
        LookupState::Idle => None,
        LookupState::Loading => {
            let mut out = String::new();
            push_line(&mut out, &locales.translate("search.loading"), locales.direction());
            Some(out)
        }
        LookupState::Failure(message) => {
            let mut out = String::new();
            push_line(&mut out, message, locales.direction());
            Some(out)
        }
        LookupState::Success(entry) => Some(render_entry(entry, locales)),
    }
}

pub fn render_entry(entry: &WordEntry, locales: &LocaleStore) -> String {
    let dir = locales.direction();
    let mut out = String::new();

    push_line(&mut out, &entry.word, dir);
    if let Some(text) = entry.primary_phonetic() {
        push_line(&mut out, text, dir);
    }
    if entry.primary_audio().is_some() {
        push_line(
            &mut out,
            &format!("{} (:play)", locales.translate("entry.play")),
            dir,
        );
    }

    for meaning in &entry.meanings {
        out.push('\n');
        push_line(&mut out, &heading(&meaning.part_of_speech), dir);
        push_line(&mut out, &locales.translate("entry.meaning").to_uppercase(), dir);
        for definition in &meaning.definitions {
            push_line(&mut out, &format!("  - {}", definition.definition), dir);
            if let Some(example) = &definition.example {
                push_line(&mut out, &format!("    \"{example}\""), dir);
            }
        }

        let synonyms = meaning.display_synonyms();
        if !synonyms.is_empty() {
            push_line(
                &mut out,
                &format!("{}: {}", locales.translate("entry.synonyms"), synonyms.join(", ")),
                dir,
            );
        }
    }

    if !entry.source_urls.is_empty() {
        out.push('\n');
        push_line(&mut out, &locales.translate("entry.source").to_uppercase(), dir);
        for url in &entry.source_urls {
            push_line(&mut out, &format!("  {url}"), dir);
        }
    }

    out
}

fn heading(part_of_speech: &str) -> String {
    let rule_len = PAGE_WIDTH.saturating_sub(part_of_speech.chars().count() + 1);
    format!("{part_of_speech} {}", "-".repeat(rule_len))
}

/// Append one line, right-aligned for right-to-left locales.
fn push_line(out: &mut String, text: &str, dir: Direction) {
    match dir {
        Direction::Ltr => out.push_str(text),
        Direction::Rtl => out.push_str(&format!("{text:>PAGE_WIDTH$}")),
    }
    out.push('\n');
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
            "definitions": [{
                "definition": "A small domesticated feline.",
                "example": "The cat sat on the mat."
            }],
            "synonyms": ["feline", "kitty", "tabby", "moggy", "puss", "tom"],
            "antonyms": []
        }],
        "sourceUrls": ["http://en.wiktionary.org/wiki/cat"]
    }]"#;

    fn cat() -> WordEntry {
        let mut entries: Vec<WordEntry> = serde_json::from_str(CAT_BODY).unwrap();
        entries.remove(0)
    }

    fn english() -> LocaleStore {
        LocaleStore::embedded("en").unwrap()
    }

    #[test]
    fn entry_renders_all_sections() {
        let text = render_entry(&cat(), &english());
        assert!(text.contains("cat"));
        assert!(text.contains("/kæt/"));
        assert!(text.contains("Play pronunciation (:play)"));
        assert!(text.contains("noun"));
        assert!(text.contains("MEANING"));
        assert!(text.contains("A small domesticated feline."));
        assert!(text.contains("\"The cat sat on the mat.\""));
        assert!(text.contains("THE SOURCE"));
        assert!(text.contains("http://en.wiktionary.org/wiki/cat"));
    }

    #[test]
    fn entry_shows_at_most_five_synonyms() {
        let text = render_entry(&cat(), &english());
        assert!(text.contains("Synonyms: feline, kitty, tabby, moggy, puss"));
        assert!(!text.contains(", tom"));
    }

    #[test]
    fn loading_and_failure_render_single_lines() {
        let locales = english();
        let loading = render_state(&LookupState::Loading, &locales).unwrap();
        assert_eq!(loading.trim_end(), "Searching...");

        let failure = render_state(
            &LookupState::Failure(lexa_core::NOT_FOUND_MESSAGE.to_string()),
            &locales,
        )
        .unwrap();
        assert!(failure.contains("We couldn't find definitions"));
    }

    #[test]
    fn idle_renders_nothing() {
        assert!(render_state(&LookupState::Idle, &english()).is_none());
    }

    #[test]
    fn chrome_marks_the_active_language() {
        let text = render_chrome(&english());
        assert!(text.contains("Dictionary"));
        assert!(text.contains("[en]"));
        assert!(text.contains("Search for a word..."));
    }

    #[test]
    fn rtl_locale_right_aligns_lines() {
        let locales = LocaleStore::from_json(
            r#"{ "ar": { "dir": "rtl", "values": { "search.loading": "يبحث" } } }"#,
            "ar",
        )
        .unwrap();
        let text = render_state(&LookupState::Loading, &locales).unwrap();
        assert!(text.starts_with(' '));
        assert!(text.trim_end().ends_with("يبحث"));
    }
}
