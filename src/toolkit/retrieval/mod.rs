

pub mod corpus;
pub mod index;
pub mod ranker;
pub mod similarity;
pub mod vectorizer;

pub use corpus::Corpus;
pub use index::{QueryResult, RebuildIndex, VectorIndex};
pub use ranker::{NoMatchReason, RankedMatch, Retrieval, rank, ranked};
pub use similarity::{batch_cosine_similarity, cosine_similarity};
pub use vectorizer::{TermVector, TfIdfVectorizer, VectorSpace};
