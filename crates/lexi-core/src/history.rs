use crate::storage::{KeyValueStore, StorageError};

/// Storage key of the JSON-encoded history array
pub const HISTORY_KEY: &str = "lexi-history";
pub const DEFAULT_CAPACITY: usize = 20;

/// Bounded, case-insensitively deduplicated, most-recent-first word list
pub struct HistoryStore<S> {
    store: S,
    capacity: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_capacity(store, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(store: S, capacity: usize) -> Self {
        Self { store, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remembered words, most recent first. Unreadable storage lists as empty.
    pub fn list(&self) -> Vec<String> {
        match self.read() {
            Ok(words) => words,
            Err(e) => {
                tracing::warn!("Ignoring unreadable history: {}", e);
                Vec::new()
            }
        }
    }

    /// Move `word` to the front, dropping case-insensitive duplicates and the overflow
    pub fn record(&mut self, word: &str) -> Result<Vec<String>, StorageError> {
        if word.trim().is_empty() {
            return Ok(self.list());
        }

        let key = word.to_lowercase();
        let mut words: Vec<String> = self
            .list()
            .into_iter()
            .filter(|w| w.to_lowercase() != key)
            .collect();

        words.insert(0, word.to_string());
        words.truncate(self.capacity);

        self.store.set(HISTORY_KEY, &serde_json::to_string(&words)?)?;
        Ok(words)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.clear(HISTORY_KEY)
    }

    fn read(&self) -> Result<Vec<String>, StorageError> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        let mut words: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        words.truncate(self.capacity);
        Ok(words)
    }
}
