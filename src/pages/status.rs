//! Mapping fetch outcomes to page states

use serde::Serialize;

use crate::client::FetchError;
use crate::config::StatusConfig;

/// How a page load went, as far as presentation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Success,
    /// Nothing to show: a 404 or an empty `data`
    NotFound,
    /// Network failure, any other error status or an undecodable body
    ServerError,
}

impl PageStatus {
    /// Classify the outcome of a fetch
    pub fn classify<T>(result: &Result<T, FetchError>, statuses: &StatusConfig) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(FetchError::Missing { .. }) => Self::NotFound,
            Err(FetchError::Status { status, .. }) if *status == statuses.not_found => {
                Self::NotFound
            }
            Err(_) => Self::ServerError,
        }
    }

    /// HTTP status to answer the browser with
    pub fn http_status(&self, statuses: &StatusConfig) -> u16 {
        match self {
            Self::Success => statuses.success,
            Self::NotFound => statuses.not_found,
            Self::ServerError => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> Result<(), FetchError> {
        Err(FetchError::Status {
            url: "http://cms/v1/posts".to_string(),
            status,
        })
    }

    #[test]
    fn test_classify() {
        let statuses = StatusConfig::default();
        assert_eq!(PageStatus::classify(&Ok::<(), FetchError>(()), &statuses), PageStatus::Success);
        assert_eq!(PageStatus::classify(&status_error(404), &statuses), PageStatus::NotFound);
        assert_eq!(PageStatus::classify(&status_error(500), &statuses), PageStatus::ServerError);
        assert_eq!(PageStatus::classify(&status_error(403), &statuses), PageStatus::ServerError);

        let missing: Result<(), FetchError> = Err(FetchError::Missing {
            url: "http://cms/v1/posts/x".to_string(),
        });
        assert_eq!(PageStatus::classify(&missing, &statuses), PageStatus::NotFound);
    }

    #[test]
    fn test_classify_respects_configured_codes() {
        let statuses = StatusConfig {
            success: 200,
            not_found: 410,
        };
        assert_eq!(PageStatus::classify(&status_error(410), &statuses), PageStatus::NotFound);
        assert_eq!(PageStatus::classify(&status_error(404), &statuses), PageStatus::ServerError);
    }

    #[test]
    fn test_http_status() {
        let statuses = StatusConfig::default();
        assert_eq!(PageStatus::NotFound.http_status(&statuses), 404);
        assert_eq!(PageStatus::ServerError.http_status(&statuses), 500);
        assert_eq!(PageStatus::Success.http_status(&statuses), 200);
    }
}
