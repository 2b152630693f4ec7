pub mod card;
pub mod entry;
pub mod types;

pub use card::{AudioControl, Card, DefinitionLine, SourceLink};
pub use entry::{Definition, DictionaryEntry, Meaning, Phonetic};
pub use types::{AppEvent, SearchState};
