//! Heuristic sentence splitting
//!
//! A paragraph is split at a whitespace character that directly follows
//! `.`, `?` or `!`. Two guards keep common abbreviations intact: the four
//! characters before the whitespace looking like `\w\.\w.` ("e.g.",
//! "U.S.") and the three characters before it looking like `[A-Z][a-z]\.`
//! ("Mr.", "Dr."). The whitespace at a split point is dropped; nothing else
//! is trimmed, so runs of whitespace and trailing whitespace survive as
//! leading spaces or empty pieces.

use once_cell::sync::Lazy;
use regex::Regex;

static INITIALISM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w\.\w.$").expect("Invalid regex"));

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]\.$").expect("Invalid regex"));

/// Split a paragraph into sentences
pub fn split_into_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in paragraph.char_indices() {
        if ch.is_whitespace() && is_sentence_end(&paragraph[..idx]) {
            sentences.push(&paragraph[start..idx]);
            start = idx + ch.len_utf8();
        }
    }

    sentences.push(&paragraph[start..]);
    sentences
}

/// Whether the text before a whitespace character ends a sentence
fn is_sentence_end(preceding: &str) -> bool {
    if !preceding.ends_with(['.', '?', '!']) {
        return false;
    }

    !INITIALISM.is_match(last_chars(preceding, 4)) && !TITLE.is_match(last_chars(preceding, 3))
}

/// The last `n` characters of `text`, or all of it when shorter
fn last_chars(text: &str, n: usize) -> &str {
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence() {
        assert_eq!(split_into_sentences("Hello world."), vec!["Hello world."]);
        assert_eq!(split_into_sentences("No terminator here"), vec!["No terminator here"]);
        assert_eq!(split_into_sentences(""), vec![""]);
    }

    #[test]
    fn test_basic_terminators() {
        assert_eq!(
            split_into_sentences("Hello world. How are you? I am fine!"),
            vec!["Hello world.", "How are you?", "I am fine!"]
        );
        assert_eq!(split_into_sentences("A. B."), vec!["A.", "B."]);
    }

    #[test]
    fn test_title_abbreviations_not_split() {
        assert_eq!(
            split_into_sentences("Mr. Smith went home. He slept."),
            vec!["Mr. Smith went home.", "He slept."]
        );
        assert_eq!(split_into_sentences("Dr. Who arrived."), vec!["Dr. Who arrived."]);
        // Any capital-lowercase-period tail counts as a title
        assert_eq!(split_into_sentences("Hi. There."), vec!["Hi. There."]);
    }

    #[test]
    fn test_initialisms_not_split() {
        assert_eq!(split_into_sentences("e.g. see below."), vec!["e.g. see below."]);
        assert_eq!(
            split_into_sentences("The U.S.A. is large. Yes."),
            vec!["The U.S.A. is large.", "Yes."]
        );
    }

    #[test]
    fn test_decimals_and_other_whitespace() {
        assert_eq!(
            split_into_sentences("3.14 is pi. Yes."),
            vec!["3.14 is pi.", "Yes."]
        );
        assert_eq!(split_into_sentences("Stop.\nGo."), vec!["Stop.", "Go."]);
    }

    #[test]
    fn test_whitespace_runs_are_preserved() {
        assert_eq!(
            split_into_sentences("Wait!  Really?"),
            vec!["Wait!", " Really?"]
        );
        assert_eq!(split_into_sentences("Done. "), vec!["Done.", ""]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            split_into_sentences("Café ouvert. Très bien!"),
            vec!["Café ouvert.", "Très bien!"]
        );
    }
}
