pub mod dialogue;
pub mod retrieval;
pub mod text;


pub use dialogue::{ChatSession, GreetingMatcher, ReplyKind, SessionState, Turn};
pub use retrieval::{Corpus, QueryResult, RebuildIndex, VectorIndex};
