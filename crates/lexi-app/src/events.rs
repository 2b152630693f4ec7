use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_core::state::AppState;
use lexi_types::{AppEvent, SearchState};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

pub mod history;
pub mod search;

use history::{handle_clear_history, handle_history_pick, handle_show_history};
use search::{handle_random_word, handle_search, handle_synonym_pick};

use crate::ui::HELP;

/// In-flight lookups, aborted when the loop exits
pub type Searches = JoinSet<()>;

/// App's main loop.
///
/// The only sender towards the UI: prompt events and search state transitions
/// are interleaved here so output keeps its order. With `sequential` set (piped
/// input) every search finishes before the next line is handled.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
    sequential: bool,
) -> anyhow::Result<()> {
    let mut state_rx = state.search.subscribe();
    let mut searches = Searches::new();

    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        reap_finished(&mut searches);

        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = state_rx.borrow_and_update().clone();
                app_to_ui_tx.send(AppEvent::StateChanged(current)).await?;
            }
            event = ui_to_app_rx.recv() => {
                let event = event?;
                tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);

                if !handle_events(&state, &app_to_ui_tx, &mut searches, event).await? {
                    break;
                }

                if sequential {
                    while searches.join_next().await.is_some() {}
                    flush_state(&mut state_rx, &app_to_ui_tx).await?;
                }
            }
        }
    }

    tracing::debug!("[EVENT_LOOP] Stopping");
    searches.abort_all();
    cancel.cancel();

    flush_state(&mut state_rx, &app_to_ui_tx).await?;
    let _ = app_to_ui_tx.send(AppEvent::Quit).await;

    Ok(())
}

/// Returns `false` once the user asked to quit
async fn handle_events(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    searches: &mut Searches,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::Submit(text) => {
            state.search.set_input(text).await;
            handle_search(state, searches, None);
        }
        AppEvent::Search(term) => handle_search(state, searches, term),
        AppEvent::RandomWord => handle_random_word(state, searches),
        AppEvent::SearchSynonym(n) => {
            handle_synonym_pick(state, searches, n, app_to_ui_tx).await?
        }
        AppEvent::SearchHistory(n) => {
            handle_history_pick(state, searches, n, app_to_ui_tx).await?
        }
        AppEvent::ShowHistory => handle_show_history(state, app_to_ui_tx).await?,
        AppEvent::ClearHistory => handle_clear_history(state, app_to_ui_tx).await?,
        AppEvent::ClearResults => state.search.reset().await,
        AppEvent::Help => app_to_ui_tx.send(AppEvent::Notice(HELP.to_string())).await?,
        AppEvent::Notice(message) => app_to_ui_tx.send(AppEvent::Notice(message)).await?,
        AppEvent::Quit => return Ok(false),
        AppEvent::StateChanged(_) | AppEvent::HistoryListed(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(true)
}

/// Drop finished search tasks so the set only holds what is still running
fn reap_finished(searches: &mut Searches) -> usize {
    let mut reaped = 0;
    while let Some(result) = searches.try_join_next() {
        if let Err(e) = result {
            if e.is_panic() {
                tracing::error!("search task panicked: {e}");
            }
        }
        reaped += 1;
    }
    reaped
}

/// Send the latest state if the UI has not seen it yet
async fn flush_state(
    state_rx: &mut watch::Receiver<SearchState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if state_rx.has_changed().unwrap_or(false) {
        let current = state_rx.borrow_and_update().clone();
        app_to_ui_tx.send(AppEvent::StateChanged(current)).await?;
    }
    Ok(())
}
