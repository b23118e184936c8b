use lazy_static::lazy_static;
use regex::Regex;

use super::lemmatizer::Lemmatizer;

lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"[[:punct:]\p{P}]").expect("valid punctuation pattern");
}


pub type Token = String;


/// Text -> lemma sequence. Pure; empty or punctuation-only input gives an empty sequence.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    lemmatizer: Lemmatizer,
}

impl Normalizer {
    pub fn new(lemmatizer: Lemmatizer) -> Self {
        Self { lemmatizer }
    }


    pub fn normalize(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();
        strip_punctuation(&lowered)
            .split_whitespace()
            .map(|word| self.lemmatizer.lemmatize(word))
            .collect()
    }
}


pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sentence() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize("Python is a high-level, interpreted programming language."),
            vec!["python", "is", "a", "highlevel", "interpreted", "programming", "language"]
        );
    }

    #[test]
    fn test_normalize_lemmatizes_plurals() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("I can answer your Questions!"), vec!["i", "can", "answer", "your", "question"]);
    }

    #[test]
    fn test_apostrophes_are_removed() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("I'm here"), vec!["im", "here"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let normalizer = Normalizer::default();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("?!... ,;").is_empty());
        assert!(normalizer.normalize("   \t ").is_empty());
    }

    #[test]
    fn test_unicode_punctuation_stripped() {
        assert_eq!(strip_punctuation("«hello» — world…"), "hello  world");
    }
}
