//! Error types shared by the form, the relay client and configuration loading.

use thiserror::Error;

/// Failure to deliver a lead to the form relay.
///
/// Every variant is recoverable: the form goes back to idle with the draft
/// intact and the visitor may resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransmissionError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The relay answered with a non-2xx status.
    #[error("relay rejected the request with status {0}")]
    Status(u16),
    /// The payload could not be turned into a request body.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// No browser window to issue the request from.
    #[error("no browser window available")]
    NoWindow,
}

impl TransmissionError {
    /// Text shown to the visitor in the blocking alert.
    pub fn visitor_message(&self) -> &'static str {
        match self {
            TransmissionError::Status(_) => {
                "We couldn't submit your request right now. Please try again in a moment."
            }
            _ => "Something went wrong sending your request. Check your connection and try again.",
        }
    }
}

/// Invalid site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("form endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// A wire value that does not belong to the field's option set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not a valid {field}")]
pub struct ParseFieldError {
    pub field: &'static str,
    pub value: String,
}

impl ParseFieldError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}
