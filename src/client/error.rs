//! Fetch errors

use thiserror::Error;

/// Why a CMS request produced no data
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never got a response
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The CMS answered with a non-success status
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON envelope
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The CMS answered successfully but with `"data": null`
    #[error("No record returned from {url}")]
    Missing { url: String },
}

impl FetchError {
    /// HTTP status of the failed response, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL of the failed request
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. }
            | Self::Status { url, .. }
            | Self::Decode { url, .. }
            | Self::Missing { url } => url,
        }
    }
}
