//! The Zendesk client facade.

use crate::config::{ClientConfig, RawConfig};
use crate::error::ZendeskError;
use crate::models::Response;
use crate::tickets::Tickets;
use crate::transport::HttpTransport;
use crate::users::Users;

/// Entry point for talking to Zendesk.
///
/// Construction resolves and validates the configuration and builds the
/// transport once; a client that exists always has credentials.
///
/// # Example
///
/// ```ignore
/// let client = ZendeskClient::new(RawConfig::from_env())?;
/// let ticket = client.ticket().find(35436).await?;
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl ZendeskClient {
    /// Creates a client from unresolved options.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if the username or password is
    /// missing, or the URL is invalid. No network call is made.
    pub fn new(raw: RawConfig) -> Result<Self, ZendeskError> {
        Self::from_config(ClientConfig::resolve(&raw)?)
    }

    /// Creates a client from an already resolved configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, ZendeskError> {
        let transport = HttpTransport::new(&config)?;
        tracing::debug!(url = %transport.base_url(), "Zendesk client initialized");
        Ok(Self { config, transport })
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ticket operations.
    pub fn ticket(&self) -> Tickets<'_> {
        Tickets::new(&self.transport)
    }

    /// User management operations.
    pub fn users(&self) -> Users<'_> {
        Users::new(&self.transport)
    }

    /// Classifies a response with the configured logger.
    ///
    /// Every response received by [`ticket`](Self::ticket) and
    /// [`users`](Self::users) passes through this check.
    pub fn handle_response(&self, response: &Response) -> Result<(), ZendeskError> {
        self.transport.handle_response(response)
    }
}

impl std::fmt::Debug for ZendeskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZendeskClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
