//! User management.

use crate::error::ZendeskError;
use crate::models::{User, UserEnvelope, UserListEnvelope, UserUpdate};
use crate::transport::HttpTransport;

/// Handle for user operations, obtained from
/// [`ZendeskClient::users`](crate::client::ZendeskClient::users).
pub struct Users<'a> {
    transport: &'a HttpTransport,
}

impl<'a> Users<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Fetches a user by ID.
    pub async fn find(&self, id: u64) -> Result<User, ZendeskError> {
        let envelope: UserEnvelope = self.transport.get(&format!("users/{}.json", id)).await?;
        Ok(envelope.user)
    }

    /// Searches users by name or email.
    pub async fn search(&self, query: &str) -> Result<Vec<User>, ZendeskError> {
        let path = format!("users/search.json?query={}", urlencoding::encode(query));
        let envelope: UserListEnvelope = self.transport.get(&path).await?;
        Ok(envelope.users)
    }

    /// Returns the first user matching `email`, if any.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ZendeskError> {
        Ok(self.search(email).await?.into_iter().next())
    }

    /// Returns whether the user with this email is suspended.
    ///
    /// An unknown email is not suspended.
    pub async fn is_suspended(&self, email: &str) -> Result<bool, ZendeskError> {
        let suspended = self
            .find_by_email(email)
            .await?
            .is_some_and(|user| user.suspended);
        tracing::debug!(suspended, "Checked user suspension");
        Ok(suspended)
    }

    /// Applies an update to an existing user.
    pub async fn update(&self, id: u64, update: &UserUpdate) -> Result<User, ZendeskError> {
        let payload = serde_json::json!({ "user": update });
        let envelope: UserEnvelope = self
            .transport
            .put(&format!("users/{}.json", id), payload)
            .await?;
        Ok(envelope.user)
    }
}
