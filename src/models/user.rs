//! User models for the Zendesk API.

use serde::{Deserialize, Serialize};

/// A Zendesk user (end user or agent).
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: u64,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Free-text details about the user (job title and similar).
    #[serde(default)]
    pub details: Option<String>,

    /// Role: "end-user", "agent" or "admin".
    #[serde(default)]
    pub role: Option<String>,

    /// Whether the user has been suspended.
    #[serde(default)]
    pub suspended: bool,
}

impl User {
    /// Returns the display name, falling back to email or ID.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Fields to change on an existing user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New details text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Suspend or reinstate the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<bool>,
}

impl UserUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Records a job title in the user's details.
    pub fn with_job(mut self, job: impl Into<String>) -> Self {
        self.details = Some(format!("Job title: {}", job.into()));
        self
    }

    /// Suspends (`true`) or reinstates (`false`) the user.
    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = Some(suspended);
        self
    }
}

/// Response wrapper for single user operations.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    /// The user.
    pub user: User,
}

/// Response wrapper for user searches.
#[derive(Debug, Clone, Deserialize)]
pub struct UserListEnvelope {
    /// Matching users.
    #[serde(default)]
    pub users: Vec<User>,

    /// Total number of matches.
    #[serde(default)]
    pub count: Option<u64>,
}
