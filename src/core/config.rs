

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ChatError, Result};
use super::knowledge::DEFAULT_KNOWLEDGE;


pub const ENV_PREFIX: &str = "LEXICHAT";

/// Keys read from the environment as comma-separated lists.
const LIST_KEYS: [&str; 3] = ["exit_keywords", "greeting_inputs", "greeting_responses"];


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {

    pub bot_name: String,
    pub welcome_message: String,
    pub closing_message: String,
    pub fallback_reply: String,
    pub prompt: String,


    pub exit_keywords: Vec<String>,
    pub greeting_inputs: Vec<String>,
    pub greeting_responses: Vec<String>,


    pub knowledge_path: Option<PathBuf>,
    pub lemmatize_verbs: bool,
}

impl ChatConfig {

    /// Layers an optional config file and `LEXICHAT_*` environment variables
    /// over the built-in defaults. List keys take comma-separated values,
    /// e.g. `LEXICHAT_EXIT_KEYWORDS=bye,leave`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Self::environment())
    }


    fn environment() -> Environment {
        LIST_KEYS.iter().fold(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(","),
            |env, key| env.with_list_parse_key(key),
        )
    }

    fn load_from(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        let mut config: Self = builder.add_source(env).build()?.try_deserialize()?;

        for list in [
            &mut config.exit_keywords,
            &mut config.greeting_inputs,
            &mut config.greeting_responses,
        ] {
            list.retain(|item| !item.trim().is_empty());
            for item in list.iter_mut() {
                *item = item.trim().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }


    pub fn validate(&self) -> Result<()> {
        if self.greeting_responses.is_empty() && !self.greeting_inputs.is_empty() {
            return Err(ChatError::InvalidConfig(
                "greeting_inputs is set but greeting_responses is empty".to_string(),
            ));
        }
        if self.bot_name.trim().is_empty() {
            return Err(ChatError::InvalidConfig("bot_name must not be empty".to_string()));
        }
        Ok(())
    }


    pub fn knowledge_text(&self) -> Result<String> {
        match &self.knowledge_path {
            Some(path) => {
                debug!("Reading knowledge text from {}", path.display());
                Ok(std::fs::read_to_string(path)?)
            }
            None => Ok(DEFAULT_KNOWLEDGE.to_string()),
        }
    }


    pub fn is_exit_keyword(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        self.exit_keywords.iter().any(|k| k.to_lowercase() == input)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: "PyBot".to_string(),
            welcome_message: "Hello! I am PyBot. Ask me anything or type 'bye' to exit."
                .to_string(),
            closing_message: "Goodbye! Have a great day.".to_string(),
            fallback_reply: "I'm sorry, I didn't understand that.".to_string(),
            prompt: "You: ".to_string(),

            exit_keywords: vec!["bye".into(), "exit".into(), "quit".into()],
            greeting_inputs: vec![
                "hi".into(),
                "hello".into(),
                "hey".into(),
                "greetings".into(),
            ],
            greeting_responses: vec![
                "hi".into(),
                "hello".into(),
                "hey there".into(),
                "hi, how can I help you?".into(),
            ],

            knowledge_path: None,
            lemmatize_verbs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_keywords_case_insensitive() {
        let config = ChatConfig::default();
        assert!(config.is_exit_keyword("bye"));
        assert!(config.is_exit_keyword("BYE"));
        assert!(config.is_exit_keyword("exit"));
        assert!(config.is_exit_keyword("quit"));
        assert!(config.is_exit_keyword("  Quit\n"));
        assert!(!config.is_exit_keyword("goodbye"));
        assert!(!config.is_exit_keyword("bye now"));
    }

    #[test]
    fn test_default_knowledge_used_without_path() {
        let config = ChatConfig::default();
        let text = config.knowledge_text().unwrap();
        assert!(text.contains("My name is PyBot."));
    }

    #[test]
    fn test_validate_rejects_missing_greeting_responses() {
        let config = ChatConfig {
            greeting_responses: Vec::new(),
            ..ChatConfig::default()
        };
        assert!(matches!(config.validate(), Err(ChatError::InvalidConfig(_))));
    }

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let map: ::config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ChatConfig::environment().source(Some(map))
    }

    #[test]
    fn test_env_lists_are_comma_separated() {
        let env = env_with(&[
            ("LEXICHAT_EXIT_KEYWORDS", "bye, leave"),
            ("LEXICHAT_GREETING_INPUTS", "yo"),
            ("LEXICHAT_GREETING_RESPONSES", "yo!,sup"),
            ("LEXICHAT_BOT_NAME", "Lex"),
            ("LEXICHAT_LEMMATIZE_VERBS", "true"),
        ]);
        let config = ChatConfig::load_from(None, env).unwrap();
        assert_eq!(config.exit_keywords, vec!["bye", "leave"]);
        assert_eq!(config.greeting_inputs, vec!["yo"]);
        assert_eq!(config.greeting_responses, vec!["yo!", "sup"]);
        assert_eq!(config.bot_name, "Lex");
        assert!(config.lemmatize_verbs);
        assert!(config.is_exit_keyword("Leave"));
    }

    #[test]
    fn test_env_scalar_with_comma_stays_a_string() {
        let env = env_with(&[("LEXICHAT_FALLBACK_REPLY", "Sorry, no idea.")]);
        let config = ChatConfig::load_from(None, env).unwrap();
        assert_eq!(config.fallback_reply, "Sorry, no idea.");
        assert_eq!(config.exit_keywords, vec!["bye", "exit", "quit"]);
    }

    #[test]
    fn test_load_from_toml_file_with_env_override() {
        let path = std::env::temp_dir().join(format!("lexichat-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            "bot_name = \"FileBot\"\n\
             exit_keywords = [\"stop\", \"done\"]\n\
             greeting_responses = [\"howdy\"]\n",
        )
        .unwrap();

        let env = env_with(&[("LEXICHAT_BOT_NAME", "EnvBot")]);
        let config = ChatConfig::load_from(Some(&path), env);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.bot_name, "EnvBot");
        assert_eq!(config.exit_keywords, vec!["stop", "done"]);
        assert_eq!(config.greeting_responses, vec!["howdy"]);
        assert_eq!(config.greeting_inputs, ChatConfig::default().greeting_inputs);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ChatConfig::load(None).unwrap();
        assert_eq!(config.exit_keywords, vec!["bye", "exit", "quit"]);
        assert_eq!(config.fallback_reply, "I'm sorry, I didn't understand that.");
    }
}
