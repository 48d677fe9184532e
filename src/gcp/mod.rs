//! Google Cloud clients: service-account auth, Cloud Storage, Vertex AI.

pub mod credentials;
pub mod gemini;
pub mod storage;
pub mod token;

use thiserror::Error;

/// Errors from the Google Cloud client layer.
#[derive(Debug, Error)]
pub enum GcpError {
    /// The service-account key file could not be read or parsed.
    #[error("credentials error: {0}")]
    Credentials(String),

    /// Signing the OAuth2 token assertion failed.
    #[error("token signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Transport-level failure talking to a Google endpoint.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A Google endpoint answered with a non-success status.
    #[error("{service} returned {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The model response could not be interpreted.
    #[error("malformed model response: {0}")]
    Malformed(String),
}

impl GcpError {
    /// Build a [`GcpError::Status`] from a non-success response, consuming
    /// the body for the error message.
    pub(crate) async fn from_response(
        service: &'static str,
        response: reqwest::Response,
    ) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        GcpError::Status {
            service,
            status,
            body,
        }
    }
}
