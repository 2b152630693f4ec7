use std::fmt;

use serde::{Deserialize, Serialize};

/// Display-ready view of one dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub headword: String,
    /// Empty when no pronunciation could be found
    pub phonetic: String,
    pub audio: AudioControl,
    /// Parts of speech joined with " • "
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionLine>,
    /// Each synonym triggers a new search when chosen
    pub synonyms: Vec<String>,
    pub source: Option<SourceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioControl {
    Enabled { url: String },
    Disabled { label: String },
}

impl AudioControl {
    pub fn is_enabled(&self) -> bool {
        matches!(self, AudioControl::Enabled { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionLine {
    pub text: String,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub url: String,
    pub host: String,
}

/// Terminal layout. Synonyms are left out; the caller numbers them across cards.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headword)?;
        if !self.phonetic.is_empty() {
            write!(f, "  {}", self.phonetic)?;
        }
        writeln!(f)?;

        match &self.audio {
            AudioControl::Enabled { url } => writeln!(f, "  ♪ {url}")?,
            AudioControl::Disabled { label } => writeln!(f, "  ♪ ({label})")?,
        }

        if !self.part_of_speech.is_empty() {
            writeln!(f, "  {}", self.part_of_speech)?;
        }

        for (i, line) in self.definitions.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, line.text)?;
            if let Some(example) = &line.example {
                writeln!(f, "     “{example}”")?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f, "  Source: {} <{}>", source.host, source.url)?;
        }

        Ok(())
    }
}
