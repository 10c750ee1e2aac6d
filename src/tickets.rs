//! Ticket access.

use crate::error::ZendeskError;
use crate::models::{Ticket, TicketEnvelope, TicketUpdate};
use crate::transport::HttpTransport;

/// Handle for ticket operations, obtained from
/// [`ZendeskClient::ticket`](crate::client::ZendeskClient::ticket).
pub struct Tickets<'a> {
    transport: &'a HttpTransport,
}

impl<'a> Tickets<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Fetches a ticket by ID.
    ///
    /// # Errors
    ///
    /// A missing ticket comes back as `ZendeskError::Unspecified` with
    /// status 404.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let ticket = client.ticket().find(35436).await?;
    /// println!("{}", ticket.display_subject());
    /// ```
    pub async fn find(&self, id: u64) -> Result<Ticket, ZendeskError> {
        let envelope: TicketEnvelope = self.transport.get(&format!("tickets/{}.json", id)).await?;
        Ok(envelope.ticket)
    }

    /// Applies an update to an existing ticket.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Validation` if Zendesk rejects the update.
    pub async fn update(&self, id: u64, update: &TicketUpdate) -> Result<Ticket, ZendeskError> {
        let payload = serde_json::json!({ "ticket": update });
        let envelope: TicketEnvelope = self
            .transport
            .put(&format!("tickets/{}.json", id), payload)
            .await?;
        Ok(envelope.ticket)
    }
}
