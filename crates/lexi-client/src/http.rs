use async_trait::async_trait;
use lexi_types::DictionaryEntry;
use reqwest::Url;
use serde_json::Value;

use crate::{DictionaryClient, LookupError};

/// Client for the free dictionary API (`.../entries/en/{word}`)
#[derive(Clone)]
pub struct HttpDictionaryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDictionaryClient {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let base_url =
            Url::parse(base_url).map_err(|e| LookupError::InvalidEndpoint(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidEndpoint(base_url.to_string()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Append the word as a single percent-encoded path segment
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

#[async_trait]
impl DictionaryClient for HttpDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let url = self.entry_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            tracing::debug!("Lookup for '{}' failed: HTTP {}", word, response.status());
            return Err(LookupError::NotFound(word.to_string()));
        }

        let body = response.text().await?;
        parse_entries(word, &body)
    }
}

/// Decode a lookup payload; anything other than a non-empty list of objects is a miss
pub fn parse_entries(word: &str, body: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LookupError::Network(format!("Failed to parse response: {e}")))?;

    let items = match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => items,
        _ => return Err(LookupError::NotFound(word.to_string())),
    };

    items
        .into_iter()
        .map(serde_json::from_value::<DictionaryEntry>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LookupError::Network(format!("Failed to parse response: {e}")))
}
