use std::sync::Arc;

use lexi_client::DictionaryClient;
use lexi_config::Config;
use tokio::sync::RwLock;

use crate::history::HistoryStore;
use crate::search::SearchOrchestrator;
use crate::storage::KeyValueStore;

/// Everything one application session owns
pub struct AppState {
    pub config: RwLock<Config>,
    pub search: SearchOrchestrator,
}

impl AppState {
    pub fn new(
        config: Config,
        client: Arc<dyn DictionaryClient>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let history = HistoryStore::with_capacity(store, config.history.capacity);
        let search = SearchOrchestrator::new(client, history, &config.render);

        Self {
            config: RwLock::new(config),
            search,
        }
    }
}
