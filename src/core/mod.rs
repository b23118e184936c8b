

pub mod config;
pub mod error;
pub mod knowledge;

pub use self::config::ChatConfig;
pub use self::error::{ChatError, Result};
pub use self::knowledge::DEFAULT_KNOWLEDGE;
