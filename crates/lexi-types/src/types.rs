use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// What the result area currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        term: String,
    },
    Success {
        term: String,
        cards: Vec<Card>,
    },
    Error {
        message: String,
    },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    /// Cards of a successful search, empty otherwise
    pub fn cards(&self) -> &[Card] {
        match self {
            SearchState::Success { cards, .. } => cards,
            _ => &[],
        }
    }

    /// Synonym chips across every card, without repeats
    pub fn synonyms(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.cards()
            .iter()
            .flat_map(|card| card.synonyms.iter())
            .filter(|s| seen.insert(*s))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A query line was submitted; it becomes the current input
    Submit(String),
    /// Search for a term, or for the current input when `None`
    Search(Option<String>),
    RandomWord,
    /// Search the n-th (1-based) synonym chip of the shown results
    SearchSynonym(usize),
    /// Search the n-th (1-based) history pill
    SearchHistory(usize),
    ShowHistory,
    ClearHistory,
    ClearResults,
    Help,
    Quit,

    StateChanged(SearchState),
    HistoryListed(Vec<String>),
    Notice(String),
}
