use reqwest::StatusCode;
use thiserror::Error;

/// Error type for HubSpot API operations.
///
/// - `Serialization` — a payload could not be encoded to JSON, or a response
///   body could not be decoded
/// - `Transport` — network/transport errors (wraps `reqwest::Error`)
/// - `Api` — the server answered with a status other than the one the
///   endpoint expects; carries the status and raw body verbatim. The status
///   line in the message uses the canonical reason phrase for the code, not
///   a custom phrase the server may have sent
/// - `InvalidCredential` — the bearer token is not a valid header value
#[derive(Debug, Error)]
pub enum HubSpotError {
    #[error("invalid request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URLs are stripped before wrapping so API keys never reach the message.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error: {status} details: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

impl HubSpotError {
    /// HTTP status of an `Api` error, `None` for every other kind.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HubSpotError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HubSpotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_line_and_body() {
        let err = HubSpotError::Api {
            status: StatusCode::NOT_FOUND,
            body: r#"{"status":"error","message":"contact does not exist"}"#.into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404 Not Found"), "{msg}");
        assert!(msg.contains("contact does not exist"), "{msg}");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = HubSpotError::InvalidCredential("bad".into());
        assert_eq!(err.status(), None);
    }
}
