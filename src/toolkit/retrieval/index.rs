use tracing::debug;

use crate::core::error::{ChatError, Result};
use crate::utils::preview;

use super::corpus::Corpus;
use super::ranker::{NoMatchReason, RankedMatch, Retrieval, rank, ranked};
use super::vectorizer::TfIdfVectorizer;


#[derive(Debug, Clone)]
pub struct QueryResult {
    pub retrieval: Retrieval,
    /// All persistent sentences, best first.
    pub ranked: Vec<RankedMatch>,
    pub vocabulary_size: usize,
}

impl QueryResult {
    pub fn best(&self) -> Option<RankedMatch> {
        self.retrieval.best()
    }
}


/// Retrieval seam between the session and the vector model.
///
/// Implementations must leave `corpus()` unchanged across `query` calls and
/// keep the highest-index tie-break.
pub trait VectorIndex {
    fn query(&mut self, text: &str) -> Result<QueryResult>;

    fn corpus(&self) -> &Corpus;
}


/// Rebuilds the whole TF-IDF space, query included, on every call.
///
/// Fine for tens of sentences; larger corpora need an incremental inverted index.
#[derive(Debug, Clone)]
pub struct RebuildIndex {
    corpus: Corpus,
    vectorizer: TfIdfVectorizer,
}

impl RebuildIndex {
    pub fn new(corpus: Corpus, vectorizer: TfIdfVectorizer) -> Self {
        Self { corpus, vectorizer }
    }
}

impl VectorIndex for RebuildIndex {
    fn query(&mut self, text: &str) -> Result<QueryResult> {
        let space = {
            let working = self.corpus.with_query(text);
            debug!(
                "Querying {} sentences with {:?}",
                working.persistent_len(),
                preview(text, 60)
            );
            self.vectorizer.vectorize(&working)
        };

        let Some((query_vector, corpus_vectors)) = space.vectors.split_last() else {
            return Err(ChatError::Index("vector space is missing the query slot".to_string()));
        };
        if corpus_vectors.len() != self.corpus.len() {
            return Err(ChatError::Index(format!(
                "expected {} corpus vectors, got {}",
                self.corpus.len(),
                corpus_vectors.len()
            )));
        }

        let retrieval = if space.is_empty_vocabulary() && !self.corpus.is_empty() {
            Retrieval::NoMatch(NoMatchReason::EmptyVocabulary)
        } else {
            rank(query_vector, corpus_vectors)
        };

        Ok(QueryResult {
            retrieval,
            ranked: ranked(query_vector, corpus_vectors),
            vocabulary_size: space.vocabulary.len(),
        })
    }

    fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}
