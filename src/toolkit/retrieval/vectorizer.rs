use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::toolkit::text::{Normalizer, Token, is_stop_word};


#[derive(Debug, Clone, PartialEq)]
pub struct TermVector(Vec<f64>);

impl TermVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0.0)
    }

    pub fn weights(&self) -> &[f64] {
        &self.0
    }
}


#[derive(Debug, Clone)]
pub struct VectorSpace {
    /// Lexicographically sorted; position is the vector dimension.
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    /// One per input sentence, in input order.
    pub vectors: Vec<TermVector>,
}

impl VectorSpace {
    pub fn is_empty_vocabulary(&self) -> bool {
        self.vocabulary.is_empty()
    }
}


/// TF-IDF over a batch of sentences, rebuilt from scratch on every call.
///
/// `tf` is the raw count, `idf = ln((1 + n) / (1 + df)) + 1`. Stop-words are
/// removed after lemmatization. An empty vocabulary yields zero-dimension
/// vectors rather than an error.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    normalizer: Normalizer,
}

impl TfIdfVectorizer {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }


    pub fn terms(&self, sentence: &str) -> Vec<Token> {
        self.normalizer
            .normalize(sentence)
            .into_iter()
            .filter(|token| !is_stop_word(token))
            .collect()
    }


    pub fn vectorize(&self, sentences: &[String]) -> VectorSpace {
        let documents: Vec<Vec<Token>> = sentences.iter().map(|s| self.terms(s)).collect();

        let vocabulary: Vec<String> = documents
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let positions: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for document in &documents {
            let unique: HashSet<&str> = document.iter().map(String::as_str).collect();
            for term in unique {
                document_frequency[positions[term]] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = documents
            .iter()
            .map(|document| {
                let mut weights = vec![0.0; vocabulary.len()];
                for term in document {
                    weights[positions[term.as_str()]] += 1.0;
                }
                for (weight, idf) in weights.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                TermVector(weights)
            })
            .collect();

        debug!(
            "Vectorized {} sentences over a vocabulary of {} terms",
            sentences.len(),
            vocabulary.len()
        );

        VectorSpace {
            vocabulary,
            idf,
            vectors,
        }
    }
}
