use std::collections::HashSet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::collapse_whitespace;

lazy_static! {
    static ref TERMINATOR: Regex = Regex::new(r#"[.!?]+["'’”)\]]*"#).expect("valid terminator pattern");

    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "eg",
        "ie", "e.g", "i.e", "inc", "ltd", "co", "no", "fig", "approx", "dept",
    ]
    .into_iter()
    .collect();
}


/// Splits knowledge text into sentence units.
///
/// A boundary is a run of `.`, `!` or `?` (plus closing quotes or brackets)
/// followed by whitespace or end of text. A period after a known abbreviation
/// or a single-letter initial is not a boundary. Line breaks alone never split.
/// Each sentence has its internal whitespace collapsed to single spaces.
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }


    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in TERMINATOR.find_iter(text) {
            let end = m.end();
            let followed_by_space = text[end..].chars().next().is_none_or(char::is_whitespace);
            if !followed_by_space {
                continue;
            }
            if m.as_str().starts_with('.') && m.as_str().len() == 1 && is_abbreviation(&text[start..m.start()]) {
                continue;
            }

            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }

        push_sentence(&mut sentences, &text[start..]);
        sentences
    }
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = collapse_whitespace(raw);
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

fn is_abbreviation(preceding: &str) -> bool {
    let Some(word) = preceding.split_whitespace().last() else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();

    let mut chars = word.chars();
    let single_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

    single_initial || ABBREVIATIONS.contains(word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge::DEFAULT_KNOWLEDGE;

    #[test]
    fn test_split_basic() {
        let splitter = SentenceSplitter::new();
        assert_eq!(
            splitter.split("Hello! I'm your AI assistant. I can answer your questions."),
            vec!["Hello!", "I'm your AI assistant.", "I can answer your questions."]
        );
    }

    #[test]
    fn test_newline_alone_does_not_split() {
        let splitter = SentenceSplitter::new();
        assert_eq!(
            splitter.split("Bye\nGoodbye! Have a nice day."),
            vec!["Bye Goodbye!", "Have a nice day."]
        );
    }

    #[test]
    fn test_abbreviations_and_initials() {
        let splitter = SentenceSplitter::new();
        assert_eq!(
            splitter.split("Dr. Smith met J. Doe today. They talked, e.g. about Rust."),
            vec!["Dr. Smith met J. Doe today.", "They talked, e.g. about Rust."]
        );
    }

    #[test]
    fn test_decimals_and_repeated_terminators() {
        let splitter = SentenceSplitter::new();
        assert_eq!(
            splitter.split("Pi is 3.14. Really?! \"Yes.\" Ok"),
            vec!["Pi is 3.14.", "Really?!", "\"Yes.\"", "Ok"]
        );
    }

    #[test]
    fn test_empty_text() {
        let splitter = SentenceSplitter::new();
        assert!(splitter.split("").is_empty());
        assert!(splitter.split(" \n\t ").is_empty());
    }

    #[test]
    fn test_default_knowledge_sentences() {
        let sentences = SentenceSplitter::new().split(DEFAULT_KNOWLEDGE);
        assert_eq!(sentences.len(), 15);
        assert_eq!(sentences[0], "Hello!");
        assert_eq!(sentences[4], "My name is PyBot.");
        assert_eq!(sentences[13], "Bye Goodbye!");
        assert_eq!(sentences[14], "Have a nice day.");
    }
}
