use thiserror::Error;

/// Errors that can occur within a `SeriesProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider returned an empty or absent result set for the symbol.
    #[error("no data returned for symbol {symbol}")]
    NoData {
        /// The symbol the provider had nothing for.
        symbol: String,
    },

    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a non-success status or an explicit
    /// error payload.
    #[error("API error: {0}")]
    Api(String),
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
