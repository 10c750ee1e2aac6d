//! Ticket models for the Zendesk API.

use serde::{Deserialize, Serialize};

/// A Zendesk ticket.
///
/// Only the fields the client needs are captured; the rest of the API
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: u64,

    /// Ticket subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// First comment on the ticket.
    #[serde(default)]
    pub description: Option<String>,

    /// Status: "new", "open", "pending", "hold", "solved" or "closed".
    #[serde(default)]
    pub status: Option<String>,

    /// Priority: "urgent", "high", "normal" or "low".
    #[serde(default)]
    pub priority: Option<String>,

    /// ID of the requesting user.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// ID of the assigned agent.
    #[serde(default)]
    pub assignee_id: Option<u64>,

    /// Tags applied to the ticket.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Ticket {
    /// Returns the subject, or a placeholder if the ticket has none.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(no subject)")
    }
}

/// A comment added to a ticket as part of an update.
#[derive(Debug, Clone, Serialize)]
pub struct TicketComment {
    /// Comment text.
    pub body: String,

    /// Whether the comment is visible to the requester.
    pub public: bool,
}

/// Fields to change on an existing ticket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketUpdate {
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Comment to append.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<TicketComment>,

    /// Replacement tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TicketUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the new priority.
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Appends a comment, public or internal.
    pub fn with_comment(mut self, body: impl Into<String>, public: bool) -> Self {
        self.comment = Some(TicketComment {
            body: body.into(),
            public,
        });
        self
    }

    /// Replaces the ticket's tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Response wrapper for single ticket operations.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketEnvelope {
    /// The ticket.
    pub ticket: Ticket,
}
