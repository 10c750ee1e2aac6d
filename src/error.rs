//! Error types for the Zendesk client.
//!
//! This module defines `ZendeskError`, the unified error type used throughout
//! the crate, and `ErrorKind`, the tag callers match on instead of inspecting
//! message text.
//!
//! # Security
//!
//! The configured password never appears in any error message.

use std::time::Duration;
use thiserror::Error;

use crate::models::ResponseBody;

/// Message prefix for authentication failures (HTTP 401 and 403).
pub const AUTHENTICATION_ERROR: &str = "Authentication Error";

/// Message prefix for rejected payloads (HTTP 422).
pub const VALIDATION_ERROR: &str = "Error creating ticket";

/// Broad category of a [`ZendeskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed configuration; no client was built.
    Configuration,
    /// The remote service rejected the credentials or locked the account.
    Authentication,
    /// The remote service rejected the request payload.
    Validation,
    /// Any other non-success status from the remote service.
    Unspecified,
    /// The request never produced a usable response.
    Transport,
}

/// Unified error type for all client operations.
#[derive(Error, Debug)]
pub enum ZendeskError {
    /// Configuration error - missing credential or invalid option value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Credentials rejected (401) or account locked out (403).
    #[error("{message}")]
    Authentication {
        /// The HTTP status that triggered the error.
        status: u16,
        /// "Authentication Error", plus any detail the remote supplied.
        message: String,
    },

    /// Remote validation failed (422 with an `error` field).
    #[error("{message}")]
    Validation {
        /// "Error creating ticket", plus the remote `error` text.
        message: String,
    },

    /// A status the client has no specific handling for.
    #[error("unexpected response from Zendesk (HTTP {status}): {body}")]
    Unspecified {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        body: ResponseBody,
    },

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ZendeskError {
    /// Creates a configuration error for a credential that was not supplied.
    pub fn not_provided(field: &str) -> Self {
        ZendeskError::Config(format!("Zendesk {} not provided", field))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZendeskError::Config(message.into())
    }

    /// Creates an authentication error, appending `detail` when present.
    pub fn authentication(status: u16, detail: Option<&str>) -> Self {
        let message = match detail {
            Some(detail) => format!("{}: {}", AUTHENTICATION_ERROR, detail),
            None => AUTHENTICATION_ERROR.to_string(),
        };
        ZendeskError::Authentication { status, message }
    }

    /// Creates a validation error carrying the remote-supplied reason.
    pub fn validation(reason: &str) -> Self {
        ZendeskError::Validation {
            message: format!("{}: {}", VALIDATION_ERROR, reason),
        }
    }

    /// Creates an error for a status with no specific handling.
    pub fn unspecified(status: u16, body: ResponseBody) -> Self {
        ZendeskError::Unspecified { status, body }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZendeskError::Config(_) => ErrorKind::Configuration,
            ZendeskError::Authentication { .. } => ErrorKind::Authentication,
            ZendeskError::Validation { .. } => ErrorKind::Validation,
            ZendeskError::Unspecified { .. } => ErrorKind::Unspecified,
            ZendeskError::Http(_)
            | ZendeskError::HttpClient(_)
            | ZendeskError::Timeout { .. }
            | ZendeskError::Serialization(_) => ErrorKind::Transport,
        }
    }

    /// Returns the HTTP status behind this error, if the remote answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ZendeskError::Authentication { status, .. }
            | ZendeskError::Unspecified { status, .. } => Some(*status),
            ZendeskError::Validation { .. } => Some(422),
            ZendeskError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_provided_error() {
        let err = ZendeskError::not_provided("username");
        assert_eq!(
            err.to_string(),
            "configuration error: Zendesk username not provided"
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_authentication_without_detail() {
        let err = ZendeskError::authentication(401, None);
        assert_eq!(err.to_string(), "Authentication Error");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_authentication_with_detail() {
        let err = ZendeskError::authentication(403, Some("Too many failed login attempts"));
        let msg = err.to_string();
        assert!(msg.starts_with("Authentication Error"));
        assert!(msg.contains("Too many failed login attempts"));
        assert_eq!(err.kind(), ErrorKind::Authentication);
    }

    #[test]
    fn test_validation_error() {
        let err = ZendeskError::validation("Subject: cannot be blank");
        assert_eq!(
            err.to_string(),
            "Error creating ticket: Subject: cannot be blank"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_unspecified_error_shows_status_and_body() {
        let err = ZendeskError::unspecified(500, ResponseBody::Text("boom".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
        assert_eq!(err.kind(), ErrorKind::Unspecified);
    }

    #[test]
    fn test_timeout_error() {
        let err = ZendeskError::Timeout {
            duration: Duration::from_secs(30),
            operation: "GET tickets/1.json".to_string(),
        };
        assert!(err.to_string().contains("30s"));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), None);
    }
}
