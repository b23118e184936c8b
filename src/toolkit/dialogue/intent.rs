use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;


/// Keyword greeting detector that bypasses retrieval.
#[derive(Debug, Clone)]
pub struct GreetingMatcher {
    triggers: HashSet<String>,
    responses: Vec<String>,
}

impl GreetingMatcher {
    pub fn new<I, J, S, T>(triggers: I, responses: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }


    /// Whitespace-split words are compared raw: lowercased, never lemmatized or
    /// stripped of punctuation, so `hello!` is not a trigger.
    pub fn is_greeting(&self, input: &str) -> bool {
        input
            .split_whitespace()
            .any(|word| self.triggers.contains(&word.to_lowercase()))
    }


    pub fn match_greeting<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Option<&str> {
        if !self.is_greeting(input) {
            return None;
        }
        self.responses.choose(rng).map(String::as_str)
    }


    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}
