//! Error taxonomy for the country client.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures surfaced by [`crate::CountriesClient`]. None of them are retried or recovered.
pub enum CountryApiError {
    /// The service answered with a non-2xx status.
    #[error("remote service responded with HTTP status {status}")]
    RemoteService {
        /// Status code of the rejected response.
        status: u16,
    },
    /// A name lookup was rejected, or a code lookup matched nothing.
    #[error("country not found")]
    NotFound {
        /// Name or code that was looked up.
        identifier: String,
        /// Status of the rejected response; `None` when the service answered with no match.
        status: Option<u16>,
    },
    /// The request failed before any status was obtained.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The body was not the JSON shape the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The identifier was rejected before a request was issued.
    #[error("invalid country identifier {0:?}")]
    InvalidIdentifier(String),
    /// A client configuration document could not be parsed.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_user_facing_defaults() {
        assert_eq!(
            CountryApiError::RemoteService { status: 503 }.to_string(),
            "remote service responded with HTTP status 503"
        );
        assert_eq!(
            CountryApiError::NotFound {
                identifier: "Atlantis".to_string(),
                status: Some(404),
            }
            .to_string(),
            "country not found"
        );
    }
}
