//! Error taxonomy for catalog API calls.

use thiserror::Error;

/// A failed catalog API call. Every variant is surfaced to the caller;
/// nothing is swallowed into an empty result.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a usable response.
    #[error("failed to reach catalog API: {0}")]
    Transport(#[from] wreq::Error),

    /// The API answered with a non-success status.
    #[error("catalog API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON envelope.
    #[error("could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = CatalogError::Status { status: 401, body: "invalid token".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("invalid token"));
    }

    #[test]
    fn test_decode_message() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = CatalogError::from(cause);
        assert!(err.to_string().contains("could not decode"));
    }
}
