use std::collections::HashSet;
use std::sync::LazyLock;

use lexi_config::render::RenderConfig;
use lexi_types::{AudioControl, Card, DefinitionLine, DictionaryEntry, SourceLink};
use regex::Regex;
use url::Url;

pub const NO_AUDIO_LABEL: &str = "No audio available";
pub const POS_SEPARATOR: &str = " • ";

/// First-to-last slash span, e.g. a pronunciation quoted inside a definition
static SLASHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/.*/").expect("valid phonetic pattern"));

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub max_definitions: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            max_definitions: config.max_definitions,
        }
    }
}

/// Build the display card for one entry
pub fn render(entry: &DictionaryEntry, options: &RenderOptions) -> Card {
    Card {
        headword: entry.word.clone(),
        phonetic: phonetic_text(entry),
        audio: audio_control(entry),
        part_of_speech: part_of_speech(entry),
        definitions: definitions(entry, options.max_definitions),
        synonyms: synonyms(entry),
        source: source_link(entry),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn phonetic_text(entry: &DictionaryEntry) -> String {
    if let Some(text) = entry.phonetics.iter().find_map(|p| non_empty(&p.text)) {
        return text.to_string();
    }

    entry
        .meanings
        .first()
        .and_then(|m| m.definitions.first())
        .and_then(|d| SLASHED.find(&d.definition))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn audio_control(entry: &DictionaryEntry) -> AudioControl {
    let url = entry
        .phonetics
        .iter()
        .find_map(|p| non_empty(&p.audio))
        .or_else(|| entry.phonetics.iter().find_map(|p| non_empty(&p.source_url)));

    match url {
        Some(url) => AudioControl::Enabled {
            url: url.to_string(),
        },
        None => AudioControl::Disabled {
            label: NO_AUDIO_LABEL.to_string(),
        },
    }
}

pub fn part_of_speech(entry: &DictionaryEntry) -> String {
    entry
        .meanings
        .iter()
        .map(|m| m.part_of_speech.as_str())
        .filter(|pos| !pos.is_empty())
        .collect::<Vec<_>>()
        .join(POS_SEPARATOR)
}

fn definitions(entry: &DictionaryEntry, max_per_meaning: usize) -> Vec<DefinitionLine> {
    entry
        .meanings
        .iter()
        .flat_map(|m| m.definitions.iter().take(max_per_meaning))
        .map(|d| DefinitionLine {
            text: d.definition.clone(),
            example: non_empty(&d.example).map(str::to_string),
        })
        .collect()
}

/// Union of every meaning's synonyms, first occurrence wins
fn synonyms(entry: &DictionaryEntry) -> Vec<String> {
    let mut seen = HashSet::new();
    entry
        .meanings
        .iter()
        .flat_map(|m| m.synonyms.iter())
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .cloned()
        .collect()
}

fn source_link(entry: &DictionaryEntry) -> Option<SourceLink> {
    let first = entry.source_urls.first()?;

    match Url::parse(first) {
        Ok(url) => url.host_str().map(|host| SourceLink {
            url: first.clone(),
            host: host.to_string(),
        }),
        Err(e) => {
            tracing::debug!("Skipping unparseable source url '{}': {}", first, e);
            None
        }
    }
}
