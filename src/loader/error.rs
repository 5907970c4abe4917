//! Load failures for the country dataset.

use thiserror::Error;

/// Why the dataset could not be loaded. Every variant is terminal for the
/// session; nothing retries.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection or transfer failure
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Source answered with a non-success status
    #[error("Upstream error: HTTP {status}")]
    Status { status: u16 },

    /// Body was not a JSON array of countries
    #[error("Failed to decode countries: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Client(_) => "Failed to set up the HTTP client",
            LoadError::Transport { .. } => "Could not reach the countries service",
            LoadError::Timeout { .. } => "Timed out waiting for the countries service",
            LoadError::Status { .. } => "Failed to fetch countries data",
            LoadError::Decode { .. } => "Received malformed countries data",
        }
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_fetch_message() {
        let err = LoadError::Status { status: 503 };
        assert_eq!(err.user_message(), "Failed to fetch countries data");
        assert_eq!(err.details(), "Upstream error: HTTP 503");
    }

    #[test]
    fn decode_error_details_include_cause() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = LoadError::Decode { source };
        assert_eq!(err.user_message(), "Received malformed countries data");
        assert!(err.details().starts_with("Failed to decode countries:"));
    }

    #[test]
    fn timeout_reports_duration() {
        let err = LoadError::Timeout { duration: 30 };
        assert_eq!(err.details(), "Request timeout after 30s");
    }
}
