use std::ops::Deref;

use tracing::debug;

use crate::core::error::{ChatError, Result};
use crate::toolkit::text::SentenceSplitter;


/// Ordered candidate replies. Order is the tie-break signal, so it is never reshuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<String>,
}

impl Corpus {
    pub fn from_text(text: &str, splitter: &SentenceSplitter) -> Result<Self> {
        let sentences = splitter.split(text);
        if sentences.is_empty() {
            return Err(ChatError::EmptyCorpus(
                "knowledge text produced no sentences".to_string(),
            ));
        }
        debug!("Loaded corpus with {} sentences", sentences.len());
        Ok(Self { sentences })
    }


    pub fn from_sentences<I, S>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sentences: sentences.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(String::as_str)
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }


    /// Appends `query` as the transient last slot. The slot is removed when the
    /// returned guard drops, on every exit path.
    pub(crate) fn with_query(&mut self, query: &str) -> WorkingCorpus<'_> {
        let persistent_len = self.sentences.len();
        self.sentences.push(query.to_string());
        WorkingCorpus {
            sentences: &mut self.sentences,
            persistent_len,
        }
    }
}


pub(crate) struct WorkingCorpus<'a> {
    sentences: &'a mut Vec<String>,
    persistent_len: usize,
}

impl WorkingCorpus<'_> {
    pub(crate) fn persistent_len(&self) -> usize {
        self.persistent_len
    }
}

impl Deref for WorkingCorpus<'_> {
    type Target = [String];

    fn deref(&self) -> &[String] {
        self.sentences.as_slice()
    }
}

impl Drop for WorkingCorpus<'_> {
    fn drop(&mut self) {
        self.sentences.truncate(self.persistent_len);
    }
}
