//! Error types for the activity API client.
//!
//! # Design
//! `Service` gets a dedicated variant because the service reports "nothing
//! matched" through a well-formed body carrying an `error` field rather
//! than an HTTP status code. Transport failures keep the underlying
//! `reqwest::Error` so callers can walk the cause chain.

use std::error::Error;
use std::fmt;

/// Errors returned by `BoredClient` query methods.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round trip failed (connection, DNS, body read).
    Transport(reqwest::Error),

    /// The service answered with an `{"error": ...}` body.
    Service(String),

    /// The response body did not match the expected activity shape —
    /// unknown category tag, missing field, or uncoercible value.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport failed: {err}"),
            ApiError::Service(message) => write!(f, "service error: {message}"),
            ApiError::Decode(message) => write!(f, "decode failed: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            ApiError::Service(_) | ApiError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}
