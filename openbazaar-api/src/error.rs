//! Error types for the OpenBazaar API client.

use thiserror::Error;

/// Message stored when a response body is not valid JSON.
pub const DECODE_ERROR_MESSAGE: &str = "cannot decode raw data";

/// Errors that can occur when talking to an OpenBazaar node.
#[derive(Debug, Error)]
pub enum OpenBazaarError {
    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a body that is not JSON.
    #[error("cannot decode raw data")]
    Decode,

    /// The node answered `{"success": false, "reason": ...}`.
    ///
    /// Common reasons:
    /// - `not logged in` — the login cookie was rejected or never set
    /// - `invalid guid` — the target node is unknown
    #[error("{reason}")]
    Api {
        /// Human-readable reason reported by the node.
        reason: String,
    },

    /// Rejected on the client side before any request was sent.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// The operation exists in the node API but this client does not support it yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// Scheme, host or port do not form a valid URL.
    #[error("invalid node URL: {0}")]
    Url(#[from] url::ParseError),
}

impl OpenBazaarError {
    /// True for failures raised before anything went over the wire.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotImplemented(_) | Self::Url(_)
        )
    }
}

/// Convenience alias for `Result<T, OpenBazaarError>`.
pub type Result<T> = std::result::Result<T, OpenBazaarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_reason_verbatim() {
        let err = OpenBazaarError::Api {
            reason: "bad guid".into(),
        };
        assert_eq!(err.to_string(), "bad guid");
    }

    #[test]
    fn decode_error_uses_fixed_message() {
        assert_eq!(OpenBazaarError::Decode.to_string(), DECODE_ERROR_MESSAGE);
    }

    #[test]
    fn client_side_classification() {
        assert!(OpenBazaarError::Validation("x".into()).is_client_side());
        assert!(OpenBazaarError::NotImplemented("confirm_order").is_client_side());
        assert!(!OpenBazaarError::Decode.is_client_side());
    }
}
