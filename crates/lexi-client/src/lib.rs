use lexi_types::DictionaryEntry;

mod http;

pub use http::HttpDictionaryClient;

/// Dictionary lookup provider interface
#[async_trait::async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Look up every entry for a word, issuing exactly one request
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Empty search term")]
    EmptyInput,

    #[error("No results found for “{0}”.")]
    NotFound(String),

    /// Transport failure or malformed payload, message kept verbatim
    #[error("{0}")]
    Network(String),

    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Network(e.to_string())
    }
}
