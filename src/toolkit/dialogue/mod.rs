

pub mod intent;
pub mod session;
pub mod state;

pub use intent::GreetingMatcher;
pub use session::{ChatSession, Turn};
pub use state::{ReplyKind, SessionState};
