use std::collections::{HashMap, HashSet};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use super::stopwords::is_stop_word;

lazy_static! {
    static ref NOUN_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("children", "child"), ("men", "man"), ("women", "woman"),
        ("mice", "mouse"), ("geese", "goose"), ("teeth", "tooth"),
        ("feet", "foot"), ("oxen", "ox"), ("data", "datum"),
        ("criteria", "criterion"), ("phenomena", "phenomenon"),
        ("analyses", "analysis"), ("theses", "thesis"), ("crises", "crisis"),
        ("indices", "index"), ("matrices", "matrix"), ("vertices", "vertex"),
        ("leaves", "leaf"), ("wives", "wife"), ("knives", "knife"),
        ("lives", "life"), ("halves", "half"), ("wolves", "wolf"),
        ("shelves", "shelf"), ("buses", "bus"), ("caches", "cache"),
        ("niches", "niche"), ("headaches", "headache"), ("aches", "ache"),
        ("movies", "movie"), ("cookies", "cookie"), ("pies", "pie"),
        ("ties", "tie"), ("lies", "lie"), ("dies", "die"),
    ]
    .into_iter()
    .collect();

    static ref INVARIANT_NOUNS: HashSet<&'static str> = [
        "series", "species", "news", "physics", "mathematics", "economics",
        "politics", "statistics", "lens", "gas", "yes", "chaos",
    ]
    .into_iter()
    .collect();

    static ref VERB_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("did", "do"), ("does", "do"), ("went", "go"), ("gone", "go"),
        ("ran", "run"), ("said", "say"), ("got", "get"), ("took", "take"),
        ("taken", "take"), ("came", "come"), ("saw", "see"), ("seen", "see"),
        ("knew", "know"), ("known", "know"), ("thought", "think"),
        ("built", "build"), ("wrote", "write"), ("written", "write"),
        ("spoke", "speak"), ("spoken", "speak"), ("began", "begin"),
        ("begun", "begin"), ("gave", "give"), ("given", "give"),
        ("told", "tell"), ("felt", "feel"),
    ]
    .into_iter()
    .collect();
}

// Ordered: longer suffixes must be tried first.
const NOUN_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("zzes", "zz"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("xes", "x"),
    ("ies", "y"),
    ("s", ""),
];

const NOUN_KEEP_SUFFIXES: &[&str] = &["ss", "us", "is"];


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
}


/// Rule-based dictionary-form reducer.
///
/// Nouns go through an irregular-plural table and then the first matching
/// suffix rule. Without a backing dictionary the rules are guarded rather than
/// validated, so words that merely look inflected (`class`, `bus`, `analysis`)
/// are left alone. Stop-words and tokens containing non-letters pass through.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    verbs: bool,
}

impl Lemmatizer {
    pub fn new(verbs: bool) -> Self {
        Self { verbs }
    }


    pub fn lemmatize(&self, word: &str) -> String {
        let noun = self.lemmatize_as(word, PartOfSpeech::Noun);
        if self.verbs {
            self.lemmatize_as(&noun, PartOfSpeech::Verb)
        } else {
            noun
        }
    }


    pub fn lemmatize_as(&self, word: &str, pos: PartOfSpeech) -> String {
        if word.is_empty() || !word.chars().all(|c| c.is_alphabetic()) {
            return word.to_string();
        }
        match pos {
            PartOfSpeech::Noun => lemmatize_noun(word),
            PartOfSpeech::Verb => lemmatize_verb(word),
        }
    }
}

fn lemmatize_noun(word: &str) -> String {
    if let Some(lemma) = NOUN_EXCEPTIONS.get(word) {
        return (*lemma).to_string();
    }
    if word.chars().count() <= 3 || is_stop_word(word) || INVARIANT_NOUNS.contains(word) {
        return word.to_string();
    }
    if NOUN_KEEP_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }

    for (suffix, replacement) in NOUN_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.chars().count() < 2 {
                return word.to_string();
            }
            return format!("{stem}{replacement}");
        }
    }
    word.to_string()
}

fn lemmatize_verb(word: &str) -> String {
    if is_stop_word(word) {
        return word.to_string();
    }
    if let Some(lemma) = VERB_EXCEPTIONS.get(word) {
        return (*lemma).to_string();
    }
    if word.ends_with("eed") {
        return word.to_string();
    }

    let stem = word
        .strip_suffix("ing")
        .or_else(|| word.strip_suffix("ed"));

    match stem {
        Some(stem) if stem.chars().count() >= 3 && stem.chars().any(is_vowel) => restore_stem(stem),
        _ => word.to_string(),
    }
}

// "runn" -> "run", "mak" -> "make"
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    let last = chars[n - 1];
    let prev = chars[n - 2];

    if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        return chars[..n - 1].iter().collect();
    }
    if n == 3 && !is_vowel(chars[0]) && is_vowel(prev) && !is_vowel(last) && !matches!(last, 'w' | 'x' | 'y') {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("questions"), "question");
        assert_eq!(lemmatizer.lemmatize("techniques"), "technique");
        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
        assert_eq!(lemmatizer.lemmatize("days"), "day");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("women"), "woman");
        assert_eq!(lemmatizer.lemmatize("leaves"), "leaf");
    }

    #[test]
    fn test_guarded_words_unchanged() {
        let lemmatizer = Lemmatizer::default();
        for word in ["class", "bus", "analysis", "series", "python", "whereas", "its"] {
            assert_eq!(lemmatizer.lemmatize(word), word);
        }
    }

    #[test]
    fn test_noun_mode_leaves_verb_forms() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("running"), "running");
        assert_eq!(lemmatizer.lemmatize("developed"), "developed");
    }

    #[test]
    fn test_verb_mode() {
        let lemmatizer = Lemmatizer::new(true);
        assert_eq!(lemmatizer.lemmatize("running"), "run");
        assert_eq!(lemmatizer.lemmatize("developed"), "develop");
        assert_eq!(lemmatizer.lemmatize("making"), "make");
        assert_eq!(lemmatizer.lemmatize("stopped"), "stop");
        assert_eq!(lemmatizer.lemmatize("built"), "build");
        assert_eq!(lemmatizer.lemmatize("string"), "string");
        assert_eq!(lemmatizer.lemmatize("needed"), "need");
    }

    #[test]
    fn test_non_alphabetic_passthrough() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("3rds"), "3rds");
        assert_eq!(lemmatizer.lemmatize(""), "");
    }

    #[test]
    fn test_part_of_speech_from_str() {
        use std::str::FromStr;
        assert_eq!(PartOfSpeech::from_str("verb").unwrap(), PartOfSpeech::Verb);
        let name: &'static str = PartOfSpeech::Noun.into();
        assert_eq!(name, "noun");
    }
}
