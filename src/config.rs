//! Configuration management for the Zendesk client.
//!
//! Options arrive as a [`RawConfig`], where each option may be given under a
//! symbolic or a text spelling of its key. [`ClientConfig::resolve`] merges
//! them over the defaults once and validates the credentials, so nothing
//! downstream needs to know about key spellings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ZendeskError;
use crate::logger::{Logger, NullLogger};

/// Endpoint used when no `url` option is supplied.
pub const DEFAULT_URL: &str = "https://govuk.zendesk.com/api/v2/";

/// Environment variable holding the API endpoint.
pub const URL_ENV: &str = "ZENDESK_URL";

/// Environment variable holding the username.
pub const USERNAME_ENV: &str = "ZENDESK_USERNAME";

/// Environment variable holding the password.
pub const PASSWORD_ENV: &str = "ZENDESK_PASSWORD";

const URL: &str = "url";
const USERNAME: &str = "username";
const PASSWORD: &str = "password";
const LOGGER: &str = "logger";

/// How an option key was spelled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A symbolic key. Wins over a text key for the same option.
    Symbolic,
    /// A plain string key, as found in JSON or environment input.
    Text,
}

/// A single option value.
#[derive(Clone)]
pub enum ConfigValue {
    /// A string option (`url`, `username`, `password`).
    Text(String),
    /// A logger option.
    Logger(Arc<dyn Logger>),
}

impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(_) => f.write_str("Text(..)"),
            ConfigValue::Logger(_) => f.write_str("Logger(..)"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<Arc<dyn Logger>> for ConfigValue {
    fn from(logger: Arc<dyn Logger>) -> Self {
        ConfigValue::Logger(logger)
    }
}

/// Unresolved client options, as supplied by the caller.
///
/// # Example
///
/// ```ignore
/// let raw = RawConfig::new()
///     .with_symbol("username", "user@example.gov.uk")
///     .with_text("password", "secret");
/// let config = ClientConfig::resolve(&raw)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct RawConfig {
    entries: HashMap<(KeyKind, String), ConfigValue>,
}

impl RawConfig {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option under the given key spelling.
    pub fn insert(&mut self, kind: KeyKind, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert((kind, key.into()), value.into());
    }

    /// Sets an option under its symbolic key.
    pub fn with_symbol(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(KeyKind::Symbolic, key, value);
        self
    }

    /// Sets an option under its text key.
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(KeyKind::Text, key, value);
        self
    }

    /// Sets the logger under its symbolic key.
    pub fn with_logger(self, logger: Arc<dyn Logger>) -> Self {
        self.with_symbol(LOGGER, logger)
    }

    /// Looks up an option, preferring the symbolic spelling.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        [KeyKind::Symbolic, KeyKind::Text]
            .into_iter()
            .find_map(|kind| self.entries.get(&(kind, key.to_string())))
    }

    /// Builds options from a string-keyed JSON object.
    ///
    /// Unknown keys are ignored. A logger cannot be expressed in JSON; add
    /// one afterwards with [`RawConfig::with_logger`].
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if `value` is not an object or a
    /// recognised option holds a non-string value.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ZendeskError> {
        let object = value
            .as_object()
            .ok_or_else(|| ZendeskError::invalid_config("configuration must be a JSON object"))?;

        let mut raw = Self::new();
        for key in [URL, USERNAME, PASSWORD] {
            match object.get(key) {
                None | Some(serde_json::Value::Null) => {}
                Some(serde_json::Value::String(s)) => raw.insert(KeyKind::Text, key, s.as_str()),
                Some(_) => {
                    return Err(ZendeskError::invalid_config(format!(
                        "{} must be a string",
                        key
                    )))
                }
            }
        }
        Ok(raw)
    }

    /// Builds options from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ZENDESK_URL`: API endpoint (optional)
    /// - `ZENDESK_USERNAME`: account username
    /// - `ZENDESK_PASSWORD`: account password or API token
    ///
    /// A `.env` file in the working directory is honoured. Missing variables
    /// are simply left unset; [`ClientConfig::resolve`] reports them.
    pub fn from_env() -> Self {
        let mut raw = Self::new();
        for (key, var) in [(URL, URL_ENV), (USERNAME, USERNAME_ENV), (PASSWORD, PASSWORD_ENV)] {
            if let Ok(value) = dotenvy::var(var) {
                raw.insert(KeyKind::Text, key, value);
            }
        }
        raw
    }
}

/// Resolved configuration for connecting to Zendesk.
///
/// Immutable once built. The password is never included in `Debug` output.
#[derive(Clone)]
pub struct ClientConfig {
    url: String,
    username: String,
    password: String,
    logger: Arc<dyn Logger>,
}

impl ClientConfig {
    /// Merges `raw` over the defaults and validates the credentials.
    ///
    /// When an option is given under both spellings, the symbolic one wins.
    /// The username is checked first, then the password, then the types
    /// of the remaining options.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if the username or password is missing
    /// or empty, or if an option holds the wrong kind of value.
    pub fn resolve(raw: &RawConfig) -> Result<Self, ZendeskError> {
        let username = Self::required(raw, USERNAME)?;
        let password = Self::required(raw, PASSWORD)?;

        let url = Self::text_option(raw, URL)?.unwrap_or_else(|| DEFAULT_URL.to_string());
        let logger = match raw.get(LOGGER) {
            None => NullLogger::shared(),
            Some(ConfigValue::Logger(logger)) => Arc::clone(logger),
            Some(ConfigValue::Text(_)) => {
                return Err(ZendeskError::invalid_config(
                    "logger must be a logger, not a string",
                ))
            }
        };

        Ok(Self {
            url,
            username,
            password,
            logger,
        })
    }

    /// Reads a string option, rejecting non-string values.
    fn text_option(raw: &RawConfig, key: &str) -> Result<Option<String>, ZendeskError> {
        match raw.get(key) {
            None => Ok(None),
            Some(ConfigValue::Text(value)) => Ok(Some(value.clone())),
            Some(ConfigValue::Logger(_)) => Err(ZendeskError::invalid_config(format!(
                "{} must be a string",
                key
            ))),
        }
    }

    /// Reads a string option that must be present and non-blank.
    fn required(raw: &RawConfig, key: &str) -> Result<String, ZendeskError> {
        Self::text_option(raw, key)?
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ZendeskError::not_provided(key))
    }

    /// The API endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The account password. Never log this value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The logger that receives successful responses.
    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
