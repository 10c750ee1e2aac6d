//! Response descriptors handed from the transport to the classifier.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ZendeskError;

/// Body of a Zendesk API response.
///
/// JSON objects are kept structured so the classifier can read their
/// `error` field; anything else is kept as opaque text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// A JSON object payload.
    Structured(Map<String, Value>),
    /// Any payload that is not a JSON object.
    Text(String),
}

impl ResponseBody {
    /// Builds a body from raw response text, keeping JSON objects structured.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        match serde_json::from_str::<Map<String, Value>>(&text) {
            Ok(map) => ResponseBody::Structured(map),
            Err(_) => ResponseBody::Text(text),
        }
    }

    /// Returns the `error` field of a structured body.
    ///
    /// String values are returned as-is; other JSON values are rendered
    /// compactly. Text bodies never have an `error` field.
    pub fn error_text(&self) -> Option<String> {
        match self {
            ResponseBody::Structured(map) => map.get("error").map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            ResponseBody::Text(_) => None,
        }
    }

    /// Returns the text of an opaque body, if it is non-blank.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) if !text.trim().is_empty() => Some(text.trim()),
            _ => None,
        }
    }

    /// Decodes the body into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Serialization` if the body does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, ZendeskError> {
        match self {
            ResponseBody::Structured(map) => Ok(serde_json::from_value(Value::Object(map))?),
            ResponseBody::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Structured(map) => {
                // Map<String, Value> always serializes
                let rendered = serde_json::to_string(map).map_err(|_| fmt::Error)?;
                f.write_str(&rendered)
            }
            ResponseBody::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ResponseBody {
    fn from(text: &str) -> Self {
        ResponseBody::Text(text.to_string())
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ResponseBody::Structured(map),
            Value::String(text) => ResponseBody::Text(text),
            other => ResponseBody::Text(other.to_string()),
        }
    }
}

/// A status and body pair returned by the Zendesk API.
///
/// Produced by the transport and consumed once by
/// [`classify`](crate::classifier::classify).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    status: u16,
    body: ResponseBody,
}

impl Response {
    /// Creates a response descriptor.
    pub fn new(status: u16, body: impl Into<ResponseBody>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response body.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Consumes the descriptor, returning its body.
    pub fn into_body(self) -> ResponseBody {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_keeps_json_objects_structured() {
        let body = ResponseBody::parse(r#"{"error":"RecordInvalid"}"#);
        assert!(matches!(body, ResponseBody::Structured(_)));
        assert_eq!(body.error_text().as_deref(), Some("RecordInvalid"));
    }

    #[test]
    fn test_parse_falls_back_to_text() {
        let body = ResponseBody::parse("Too many failed login attempts");
        assert_eq!(
            body,
            ResponseBody::Text("Too many failed login attempts".to_string())
        );
        assert_eq!(body.error_text(), None);
    }

    #[test]
    fn test_parse_json_array_is_text() {
        let body = ResponseBody::parse("[1, 2]");
        assert!(matches!(body, ResponseBody::Text(_)));
    }

    #[test]
    fn test_error_text_renders_non_string_values() {
        let body = ResponseBody::from(json!({"error": {"title": "Forbidden"}}));
        assert_eq!(
            body.error_text().as_deref(),
            Some(r#"{"title":"Forbidden"}"#)
        );
    }

    #[test]
    fn test_as_text_ignores_blank_bodies() {
        assert_eq!(ResponseBody::from("   ").as_text(), None);
        assert_eq!(ResponseBody::from(" locked ").as_text(), Some("locked"));
        assert_eq!(ResponseBody::from(json!({"a": 1})).as_text(), None);
    }

    #[test]
    fn test_deserialize_structured_body() {
        #[derive(Deserialize)]
        struct Payload {
            count: u32,
        }
        let body = ResponseBody::from(json!({"count": 3}));
        let payload: Payload = body.deserialize().unwrap();
        assert_eq!(payload.count, 3);
    }

    #[test]
    fn test_deserialize_text_body_fails() {
        let body = ResponseBody::from("OK");
        let err = body.deserialize::<Map<String, Value>>().unwrap_err();
        assert!(matches!(err, ZendeskError::Serialization(_)));
    }

    #[test]
    fn test_display_structured_body() {
        let body = ResponseBody::from(json!({"error": "Unauth"}));
        assert_eq!(body.to_string(), r#"{"error":"Unauth"}"#);
    }
}
