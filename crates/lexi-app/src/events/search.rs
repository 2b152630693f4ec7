use std::sync::Arc;

use kanal::AsyncSender;
use lexi_core::state::AppState;
use lexi_types::AppEvent;

use super::Searches;

/// Run a search without blocking the event loop, so a newer one can supersede it
pub fn handle_search(state: &Arc<AppState>, searches: &mut Searches, term: Option<String>) {
    let state = state.clone();
    searches.spawn(async move {
        let outcome = state.search.search(term.as_deref()).await;
        tracing::debug!("Search finished: {:?}", outcome);
    });
}

pub fn handle_random_word(state: &Arc<AppState>, searches: &mut Searches) {
    let state = state.clone();
    searches.spawn(async move {
        let (word, outcome) = state.search.random_word().await;
        tracing::debug!("Random word '{}' finished: {:?}", word, outcome);
    });
}

pub async fn handle_synonym_pick(
    state: &Arc<AppState>,
    searches: &mut Searches,
    n: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let synonyms = state.search.synonyms();

    match n.checked_sub(1).and_then(|i| synonyms.get(i)) {
        Some(word) => handle_search(state, searches, Some(word.clone())),
        None => {
            app_to_ui_tx
                .send(AppEvent::Notice(format!("No synonym #{n} in the current results")))
                .await?
        }
    }

    Ok(())
}
