use std::sync::Arc;

use kanal::AsyncSender;
use lexi_core::state::AppState;
use lexi_types::AppEvent;

use super::Searches;
use super::search::handle_search;

pub async fn handle_show_history(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let words = state.search.history().await;
    app_to_ui_tx.send(AppEvent::HistoryListed(words)).await?;
    Ok(())
}

pub async fn handle_history_pick(
    state: &Arc<AppState>,
    searches: &mut Searches,
    n: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let words = state.search.history().await;

    match n.checked_sub(1).and_then(|i| words.get(i)) {
        Some(word) => handle_search(state, searches, Some(word.clone())),
        None => {
            app_to_ui_tx
                .send(AppEvent::Notice(format!("No history entry #{n}")))
                .await?
        }
    }

    Ok(())
}

pub async fn handle_clear_history(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match state.search.clear_history().await {
        Ok(()) => {
            tracing::info!("History cleared");
            app_to_ui_tx.send(AppEvent::HistoryListed(Vec::new())).await?;
        }
        Err(e) => {
            tracing::error!("Failed to clear history: {}", e);
            app_to_ui_tx
                .send(AppEvent::Notice(format!("Could not clear history: {e}")))
                .await?;
        }
    }

    Ok(())
}
