use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    #[default]
    AwaitingInput,
    GreetingReply,
    RetrievalReply,
    /// Terminal.
    Exited,
}

impl SessionState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exited)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Exit,
    Greeting,
    Retrieval,
    Fallback,
}

impl ReplyKind {
    /// State the session passes through while emitting this reply.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self {
            Self::Exit => SessionState::Exited,
            Self::Greeting => SessionState::GreetingReply,
            Self::Retrieval | Self::Fallback => SessionState::RetrievalReply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_state_names() {
        assert_eq!(SessionState::AwaitingInput.to_string(), "AWAITING_INPUT");
        assert_eq!(SessionState::from_str("EXITED").unwrap(), SessionState::Exited);
        assert_eq!(SessionState::default(), SessionState::AwaitingInput);
    }

    #[test]
    fn test_reply_kind_states() {
        assert!(ReplyKind::Exit.state().is_terminal());
        assert_eq!(ReplyKind::Fallback.state(), SessionState::RetrievalReply);
        assert!(!ReplyKind::Greeting.state().is_terminal());
    }
}
