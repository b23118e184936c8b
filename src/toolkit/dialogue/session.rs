use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::core::config::ChatConfig;
use crate::core::error::Result;
use crate::toolkit::retrieval::{
    Corpus, NoMatchReason, RankedMatch, RebuildIndex, Retrieval, TfIdfVectorizer, VectorIndex,
};
use crate::toolkit::text::{Lemmatizer, Normalizer, SentenceSplitter};
use crate::utils::preview;

use super::intent::GreetingMatcher;
use super::state::{ReplyKind, SessionState};


/// Outcome of a single user turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub input: String,
    pub kind: ReplyKind,
    pub state: SessionState,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_match_reason: Option<NoMatchReason>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranked: Vec<RankedMatch>,
}

impl Turn {
    fn simple(input: &str, kind: ReplyKind, reply: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            kind,
            state: kind.state(),
            reply: reply.into(),
            matched_index: None,
            score: None,
            no_match_reason: None,
            ranked: Vec::new(),
        }
    }

    /// Pretty JSON record of the turn, keeping at most `top` ranked candidates.
    pub fn to_json(&self, top: usize) -> Result<String> {
        let mut turn = self.clone();
        turn.ranked.truncate(top);
        Ok(serde_json::to_string_pretty(&turn)?)
    }
}


/// Owns the corpus (through its index) for the lifetime of one conversation.
pub struct ChatSession<I: VectorIndex = RebuildIndex, R: Rng = StdRng> {
    id: Uuid,
    config: ChatConfig,
    index: I,
    greeter: GreetingMatcher,
    rng: R,
    state: SessionState,
}

impl ChatSession<RebuildIndex, StdRng> {

    pub fn from_config(config: ChatConfig) -> Result<Self> {
        let corpus = Corpus::from_text(&config.knowledge_text()?, &SentenceSplitter::new())?;
        let normalizer = Normalizer::new(Lemmatizer::new(config.lemmatize_verbs));
        let index = RebuildIndex::new(corpus, TfIdfVectorizer::new(normalizer));
        Ok(Self::new(config, index, StdRng::from_entropy()))
    }
}

impl<I: VectorIndex, R: Rng> ChatSession<I, R> {
    pub fn new(config: ChatConfig, index: I, rng: R) -> Self {
        let greeter = GreetingMatcher::new(&config.greeting_inputs, config.greeting_responses.clone());
        Self {
            id: Uuid::new_v4(),
            config,
            index,
            greeter,
            rng,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn corpus(&self) -> &Corpus {
        self.index.corpus()
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }


    /// Routes one input: exit keyword, then greeting, then retrieval.
    /// Leaves the session in the reply state of the returned turn until
    /// [`ChatSession::await_input`] is called.
    pub fn respond(&mut self, input: &str) -> Result<Turn> {
        let span = info_span!("turn", session = %self.id);
        let _enter = span.enter();

        if self.state.is_terminal() || self.config.is_exit_keyword(input) {
            info!("Exit requested");
            self.state = SessionState::Exited;
            return Ok(Turn::simple(input, ReplyKind::Exit, self.config.closing_message.clone()));
        }

        if let Some(reply) = self.greeter.match_greeting(input, &mut self.rng) {
            debug!("Greeting short-circuit for {:?}", preview(input, 40));
            let turn = Turn::simple(input, ReplyKind::Greeting, reply);
            self.state = turn.state;
            return Ok(turn);
        }

        let result = self.index.query(input)?;
        let turn = match result.retrieval {
            Retrieval::Match(m) => {
                let reply = self.index.corpus().get(m.index).unwrap_or_default().to_string();
                debug!("Matched sentence {} with score {:.4}", m.index, m.score);
                Turn {
                    matched_index: Some(m.index),
                    score: Some(m.score),
                    ranked: result.ranked,
                    ..Turn::simple(input, ReplyKind::Retrieval, reply)
                }
            }
            Retrieval::NoMatch(reason) => {
                debug!("No relevant match ({}) for {:?}", reason, preview(input, 40));
                Turn {
                    no_match_reason: Some(reason),
                    score: Some(0.0),
                    ranked: result.ranked,
                    ..Turn::simple(input, ReplyKind::Fallback, self.config.fallback_reply.clone())
                }
            }
        };
        self.state = turn.state;
        Ok(turn)
    }

    /// Returns to `AwaitingInput` once a reply has been emitted. No-op after exit.
    pub fn await_input(&mut self) {
        if !self.state.is_terminal() {
            self.state = SessionState::AwaitingInput;
        }
    }


    /// Interactive loop: banner, then one reply line per input line until an
    /// exit keyword or end of input.
    pub fn run<In: BufRead, Out: Write>(&mut self, mut input: In, mut output: Out) -> Result<()> {
        let span = info_span!("session", id = %self.id);
        let _enter = span.enter();
        info!("Session started with {} corpus sentences", self.corpus().len());

        writeln!(output, "{}: {}", self.config.bot_name, self.config.welcome_message)?;

        let mut buf = Vec::new();
        while !self.state.is_terminal() {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                self.state = SessionState::Exited;
                writeln!(output, "{}: {}", self.config.bot_name, self.config.closing_message)?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if std::str::from_utf8(&buf).is_err() {
                warn!("Input line was not valid UTF-8; decoded lossily");
            }
            let line = line.trim_end_matches(['\n', '\r']);

            let turn = self.respond(line)?;
            writeln!(output, "{}: {}", self.config.bot_name, turn.reply)?;
            self.await_input();
        }

        info!("Session ended");
        Ok(())
    }
}
