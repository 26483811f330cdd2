//! Error types for the lookup path and the secondary fetches

use thiserror::Error;

use crate::state::LookupOrigin;

/// Failures on the primary lookup path. These end the action and are shown
/// in the error panel, so `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Please enter a Pokemon name or ID")]
    EmptyInput,
    #[error("{}", not_found_message(.0))]
    NotFound(LookupOrigin),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

fn not_found_message(origin: &LookupOrigin) -> &'static str {
    match origin {
        LookupOrigin::Search => "Pokemon not found",
        LookupOrigin::Random => "Could not fetch random Pokemon",
    }
}

/// Failures talking to the API. Callers on secondary paths absorb these.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Map onto the lookup taxonomy: any non-success status is a miss.
    pub fn into_lookup(self, origin: LookupOrigin) -> LookupError {
        match self {
            ApiError::Status { .. } => LookupError::NotFound(origin),
            ApiError::Request { source, .. } => LookupError::Request(source.to_string()),
            ApiError::Decode { source, .. } => LookupError::Decode(source.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LookupError::EmptyInput.to_string(),
            "Please enter a Pokemon name or ID"
        );
        assert_eq!(
            LookupError::NotFound(LookupOrigin::Search).to_string(),
            "Pokemon not found"
        );
        assert_eq!(
            LookupError::NotFound(LookupOrigin::Random).to_string(),
            "Could not fetch random Pokemon"
        );
    }

    #[test]
    fn test_status_maps_to_not_found() {
        let err = ApiError::Status {
            url: "http://localhost/pokemon/missingno".into(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.into_lookup(LookupOrigin::Random),
            LookupError::NotFound(LookupOrigin::Random)
        );
    }
}
