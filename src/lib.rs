

pub mod core;
pub mod toolkit;
pub mod utils;

pub use utils::{collapse_whitespace, preview};


pub use crate::core::config::ChatConfig;
pub use crate::core::error::{ChatError, Result};
pub use toolkit::{ChatSession, Corpus, RebuildIndex, ReplyKind, SessionState, Turn, VectorIndex};


pub const DEFAULT_LOG_FILTER: &str = "warn,lexichat=info";


pub const DEFAULT_TOP_K: usize = 3;
