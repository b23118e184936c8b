use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use super::similarity::batch_cosine_similarity;
use super::vectorizer::TermVector;


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub index: usize,
    pub score: f64,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    /// Query and corpus reduced to nothing after stop-word removal.
    EmptyVocabulary,
    ZeroSimilarity,
    EmptyCorpus,
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Retrieval {
    Match(RankedMatch),
    NoMatch(NoMatchReason),
}

impl Retrieval {
    pub fn best(&self) -> Option<RankedMatch> {
        match self {
            Self::Match(m) => Some(*m),
            Self::NoMatch(_) => None,
        }
    }
}


pub fn scores(query: &TermVector, corpus: &[TermVector]) -> Vec<f64> {
    let candidates: Vec<&[f64]> = corpus.iter().map(TermVector::weights).collect();
    batch_cosine_similarity(query.weights(), &candidates)
}


/// Best match by cosine similarity.
///
/// Ties go to the highest index, the element a stable ascending sort would
/// leave last. A best score of exactly zero is reported as no match.
pub fn rank(query: &TermVector, corpus: &[TermVector]) -> Retrieval {
    let mut best: Option<RankedMatch> = None;
    for (index, score) in scores(query, corpus).into_iter().enumerate() {
        if best.is_none_or(|b| score >= b.score) {
            best = Some(RankedMatch { index, score });
        }
    }

    match best {
        None => Retrieval::NoMatch(NoMatchReason::EmptyCorpus),
        Some(m) if m.score == 0.0 => Retrieval::NoMatch(NoMatchReason::ZeroSimilarity),
        Some(m) => Retrieval::Match(m),
    }
}


/// Every corpus entry by descending score; equal scores keep the higher index first.
pub fn ranked(query: &TermVector, corpus: &[TermVector]) -> Vec<RankedMatch> {
    let mut matches: Vec<RankedMatch> = scores(query, corpus)
        .into_iter()
        .enumerate()
        .map(|(index, score)| RankedMatch { index, score })
        .collect();
    matches.sort_by(|a, b| a.score.total_cmp(&b.score));
    matches.reverse();
    matches
}
