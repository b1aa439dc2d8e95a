//! Error types for the Pokédex plugin.
//!
//! [`PokedexError`] covers every failure the plugin can observe, from HTTP
//! statuses reported by the host to malformed PokeAPI payloads. The UI never
//! shows these directly: [`PokedexError::user_message`] collapses them to the
//! two strings a user can see.

use thiserror::Error;

/// Message shown when the search query is empty or whitespace.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid Pokemon Name.";

/// Message shown for any failed lookup (not found, network, malformed body).
pub const LOOKUP_FAILED_MESSAGE: &str = "Lookup failed.";

/// The main error type for Pokédex operations.
///
/// # Examples
///
/// ```
/// use pokedex::domain::{PokedexError, LOOKUP_FAILED_MESSAGE};
///
/// let err = PokedexError::Http { status: 404, detail: "Not Found".into() };
/// assert_eq!(err.user_message(), LOOKUP_FAILED_MESSAGE);
/// ```
#[derive(Debug, Error)]
pub enum PokedexError {
    /// The host reported a non-success status for a request.
    ///
    /// Zellij reports transport failures (DNS, TLS, refused connections) as
    /// status 400 with the failure text as body, so this variant also covers
    /// network errors.
    #[error("HTTP {status}: {detail}")]
    Http {
        /// Status code reported by the host.
        status: u16,
        /// Start of the response body.
        detail: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The worker reported that a response body was malformed.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The search query was empty or whitespace-only.
    #[error("Invalid query: {0:?}")]
    InvalidQuery(String),

    /// A response carried a request context the plugin did not issue.
    #[error("Unknown request context: {0}")]
    UnknownRequest(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Theme file could not be loaded or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A file (such as a custom theme) could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns the string the home screen shows for this error.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidQuery(_) => INVALID_QUERY_MESSAGE,
            _ => LOOKUP_FAILED_MESSAGE,
        }
    }
}

/// A specialized `Result` type for Pokédex operations.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_query_has_its_own_message() {
        let err = PokedexError::InvalidQuery("   ".to_string());
        assert_eq!(err.user_message(), INVALID_QUERY_MESSAGE);
    }

    #[test]
    fn every_lookup_failure_collapses_to_one_message() {
        let not_found = PokedexError::Http {
            status: 404,
            detail: "Not Found".to_string(),
        };
        let decode = PokedexError::Decode(
            serde_json::from_str::<u32>("not json").unwrap_err(),
        );
        assert_eq!(not_found.user_message(), LOOKUP_FAILED_MESSAGE);
        assert_eq!(decode.user_message(), LOOKUP_FAILED_MESSAGE);
    }
}
