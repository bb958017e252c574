use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use jp_quiz::logging::init_tracing;
use jp_quiz::{ApiClient, Config, Level, QuizService, QuizStore};

/// Inspect the quiz dataset served by the quiz API.
#[derive(Debug, Parser)]
#[command(name = "jp-quiz", version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the dataset endpoint from the config
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the distinct levels in the dataset
    Levels,
    /// Print the questions of one level as JSON lines
    Questions {
        #[arg(long)]
        level: String,
    },
    /// Print how many questions a level has
    Count {
        #[arg(long)]
        level: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.url {
        config.api.base_url = url;
        config.validate()?;
    }

    let service = QuizService::new(ApiClient::new()?, QuizStore::new());
    let loaded = service
        .load_from_config(&config.api)
        .await
        .with_context(|| format!("Failed to load quiz data from {}", config.api.base_url))?;
    tracing::info!(questions = loaded, "Quiz data loaded");

    let store = service.store();
    match cli.command {
        Command::Levels => {
            for level in store.available_levels() {
                println!("{}", level);
            }
        }
        Command::Questions { level } => {
            for question in store.get_quiz_by_level(&Level::parse(&level)) {
                println!("{}", serde_json::to_string(&question)?);
            }
        }
        Command::Count { level } => {
            println!("{}", store.get_question_count_by_level(&Level::parse(&level)));
        }
    }

    Ok(())
}
