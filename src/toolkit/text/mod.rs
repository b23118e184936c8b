

pub mod lemmatizer;
pub mod normalizer;
pub mod splitter;
pub mod stopwords;

pub use lemmatizer::{Lemmatizer, PartOfSpeech};
pub use normalizer::{Normalizer, Token, strip_punctuation};
pub use splitter::SentenceSplitter;
pub use stopwords::{ENGLISH_STOP_WORDS, is_stop_word};
