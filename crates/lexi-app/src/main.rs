use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use lexi_client::HttpDictionaryClient;
use lexi_config::Config;
use lexi_core::search::SearchOutcome;
use lexi_core::state::AppState;
use lexi_core::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use tokio::signal;

mod cli;
mod controller;
mod events;
mod io;
mod logging;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    logging::init(&config.log)?;

    let state = Arc::new(build_state(config, cli.ephemeral)?);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Lookup { word } => lookup_once(&state, Some(word.join(" "))).await,
        Command::Random => lookup_once(&state, None).await,
        Command::History { clear } => history(&state, clear).await,
        Command::Repl => run(state).await,
    }
}

fn build_state(config: Config, ephemeral: bool) -> anyhow::Result<AppState> {
    let client = HttpDictionaryClient::new(&config.api.base_url)
        .context("Failed to create dictionary client")?;

    let store: Box<dyn KeyValueStore> = if ephemeral {
        tracing::info!("Keeping history in memory only");
        Box::new(MemoryStore::new())
    } else {
        tracing::info!("History store: {}", config.history.path.display());
        Box::new(JsonFileStore::new(&config.history.path))
    };

    Ok(AppState::new(config, Arc::new(client), store))
}

/// Search once and print the outcome; `None` picks a random word
async fn lookup_once(state: &AppState, word: Option<String>) -> anyhow::Result<ExitCode> {
    let outcome = match word {
        Some(word) => state.search.search(Some(&word)).await,
        None => state.search.random_word().await.1,
    };

    let mut out = std::io::stdout().lock();
    ui::render_state(&mut out, &state.search.state())?;

    Ok(match outcome {
        SearchOutcome::Found(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn history(state: &AppState, clear: bool) -> anyhow::Result<ExitCode> {
    if clear {
        state
            .search
            .clear_history()
            .await
            .context("Failed to clear history")?;
    }

    let words = state.search.history().await;
    ui::render_history(&mut std::io::stdout().lock(), &words)?;
    Ok(ExitCode::SUCCESS)
}

/// Interactive prompt until `:quit`, EOF or Ctrl+C
async fn run(state: Arc<AppState>) -> anyhow::Result<ExitCode> {
    let interactive = atty::is(atty::Stream::Stdin);
    tracing::debug!(
        "Starting prompt (interactive: {}, api: {})",
        interactive,
        state.config.read().await.api.base_url
    );
    if interactive {
        println!("lexi: type a word to look it up, :help for commands");
    }

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(std::io::stdout(), interactive);
    controller.spawn_stdin();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::debug!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();

    let drained = tokio::time::timeout(Duration::from_secs(2), async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                tracing::error!("task failed during shutdown: {e}");
            }
        }
    })
    .await;

    if drained.is_err() {
        tracing::warn!("Tasks did not stop in time, aborting");
        tasks.abort_all();
    }

    Ok(ExitCode::SUCCESS)
}
