use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexichat::{ChatConfig, ChatSession, DEFAULT_LOG_FILTER, DEFAULT_TOP_K};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "lexichat", about = "Retrieval chatbot over a small knowledge corpus")]
struct Cli {
    /// Configuration file (toml, yaml or json).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Knowledge text file; overrides `knowledge_path` from the config.
    #[arg(short, long, global = true)]
    knowledge: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session on stdin/stdout (default).
    Chat,

    /// Answer a single input and exit.
    Ask {
        text: String,
        /// Print the full turn record as JSON.
        #[arg(long)]
        json: bool,
        /// Number of ranked candidates to include in JSON output.
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let mut config = ChatConfig::load(cli.config.as_deref())?;
    if let Some(knowledge) = cli.knowledge {
        config.knowledge_path = Some(knowledge);
    }

    let mut session = ChatSession::from_config(config)?;

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Ask { text, json, top } => {
            let turn = session.respond(&text)?;
            if json {
                println!("{}", turn.to_json(top)?);
            } else {
                println!("{}: {}", session.config().bot_name, turn.reply);
            }
        }
    }

    Ok(())
}
