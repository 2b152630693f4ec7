use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lexi_client::{DictionaryClient, LookupError};
use lexi_config::render::RenderConfig;
use lexi_types::{Card, SearchState};
use tokio::sync::{Mutex, RwLock, watch};

use crate::history::HistoryStore;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::render::{RenderOptions, render};
use crate::storage::{KeyValueStore, StorageError};
use crate::words;

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

pub type History = HistoryStore<Box<dyn KeyValueStore>>;

/// How a single `search` call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank term, nothing happened
    Ignored,
    /// Number of cards shown
    Found(usize),
    /// Error message shown
    Failed(String),
    /// A newer search (or reset) started before this one resolved
    Superseded,
}

/// Drives one result area: loading, lookup, rendering and history.
///
/// The latest search always wins. Every call takes a new generation number and
/// only publishes its result if no other search or reset started meanwhile.
pub struct SearchOrchestrator {
    client: Arc<dyn DictionaryClient>,
    history: Mutex<History>,
    preprocessor: DefaultPreprocessor,
    input: RwLock<String>,
    state: watch::Sender<SearchState>,
    generation: AtomicU64,
    render: RenderOptions,
    max_entries: usize,
}

impl SearchOrchestrator {
    pub fn new(client: Arc<dyn DictionaryClient>, history: History, render: &RenderConfig) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);

        Self {
            client,
            history: Mutex::new(history),
            preprocessor: DefaultPreprocessor,
            input: RwLock::new(String::new()),
            state,
            generation: AtomicU64::new(0),
            render: RenderOptions::from(render),
            max_entries: render.max_entries,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub async fn input(&self) -> String {
        self.input.read().await.clone()
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        *self.input.write().await = text.into();
    }

    /// Look up `term`, or the current input when `term` is absent or empty
    pub async fn search(&self, term: Option<&str>) -> SearchOutcome {
        let raw = match term.filter(|t| !t.is_empty()) {
            Some(term) => term.to_string(),
            None => self.input().await,
        };

        let word = self.preprocessor.process(&raw);
        if word.is_empty() {
            tracing::debug!("Ignoring blank search");
            return SearchOutcome::Ignored;
        }

        let token = self.begin(SearchState::Loading { term: word.clone() });
        tracing::info!("Searching '{}' (generation {})", word, token);

        let result = self.client.lookup(&word).await;

        match result {
            Ok(entries) => {
                let cards: Vec<Card> = entries
                    .iter()
                    .take(self.max_entries)
                    .map(|entry| render(entry, &self.render))
                    .collect();
                let count = cards.len();

                // Held across publish and record so history follows publish order
                let mut history = self.history.lock().await;
                let published = self.publish(
                    token,
                    SearchState::Success {
                        term: word.clone(),
                        cards,
                    },
                );
                if !published {
                    tracing::debug!("Discarding stale result for '{}' (generation {})", word, token);
                    return SearchOutcome::Superseded;
                }

                tracing::info!(
                    "Found {} entries for '{}', showing {}",
                    entries.len(),
                    word,
                    count
                );
                if let Err(e) = history.record(&word) {
                    tracing::warn!("Failed to record '{}' in history: {}", word, e);
                }

                SearchOutcome::Found(count)
            }
            Err(e) => {
                let message = error_message(&e);
                let published = self.publish(
                    token,
                    SearchState::Error {
                        message: message.clone(),
                    },
                );
                if !published {
                    tracing::debug!("Discarding stale error for '{}' (generation {})", word, token);
                    return SearchOutcome::Superseded;
                }

                tracing::info!("Search for '{}' failed: {}", word, message);
                SearchOutcome::Failed(message)
            }
        }
    }

    /// Put a random word into the input and search for it
    pub async fn random_word(&self) -> (String, SearchOutcome) {
        let word = words::random_word(&mut rand::thread_rng()).to_string();
        self.set_input(word.clone()).await;
        let outcome = self.search(Some(&word)).await;
        (word, outcome)
    }

    /// Clear input and results; any in-flight search is abandoned
    pub async fn reset(&self) {
        self.input.write().await.clear();

        let _history = self.history.lock().await;
        self.begin(SearchState::Idle);
    }

    pub async fn history(&self) -> Vec<String> {
        self.history.lock().await.list()
    }

    pub async fn clear_history(&self) -> Result<(), StorageError> {
        self.history.lock().await.clear()
    }

    /// Synonym chips of the shown results
    pub fn synonyms(&self) -> Vec<String> {
        self.state.borrow().synonyms()
    }

    /// Start a new generation and publish `state` under the watch lock.
    ///
    /// Every earlier generation is stale from here on.
    fn begin(&self, state: SearchState) -> u64 {
        let mut token = 0;
        self.state.send_modify(|current| {
            token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = state;
        });
        token
    }

    /// Publish `state` only if `token` is still the latest generation
    fn publish(&self, token: u64, state: SearchState) -> bool {
        self.state.send_if_modified(|current| {
            if !self.is_current(token) {
                return false;
            }
            *current = state;
            true
        })
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }
}

fn error_message(e: &LookupError) -> String {
    let message = e.to_string();
    if message.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        message
    }
}
