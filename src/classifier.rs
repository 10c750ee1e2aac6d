//! Translation of Zendesk responses into domain errors.
//!
//! | status | outcome |
//! |---|---|
//! | 200 | logged through the configured [`Logger`], accepted |
//! | 401, 403 | [`ZendeskError::Authentication`] |
//! | 422 with an `error` field | [`ZendeskError::Validation`] |
//! | anything else | [`ZendeskError::Unspecified`] |
//!
//! Zendesk answers 403 for locked-out accounts, so it is treated the same
//! as 401.

use crate::error::ZendeskError;
use crate::logger::Logger;
use crate::models::Response;

/// HTTP statuses with specific handling.
pub mod status {
    /// Accepted response.
    pub const OK: u16 = 200;
    /// Bad credentials.
    pub const UNAUTHORIZED: u16 = 401;
    /// Account locked out.
    pub const FORBIDDEN: u16 = 403;
    /// Payload rejected by remote validation.
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
}

/// Decides whether a response is accepted or becomes an error.
///
/// On 200 the response is passed to `logger.info` exactly once. Every other
/// outcome is an error and nothing is logged.
///
/// # Errors
///
/// - `ZendeskError::Authentication` for 401 and 403
/// - `ZendeskError::Validation` for 422 with an `error` field
/// - `ZendeskError::Unspecified` for any other status
pub fn classify(response: &Response, logger: &dyn Logger) -> Result<(), ZendeskError> {
    let body = response.body();
    match (response.status(), body.error_text()) {
        (status::OK, _) => {
            logger.info(response);
            Ok(())
        }
        (code @ (status::UNAUTHORIZED | status::FORBIDDEN), error) => {
            let detail = error.as_deref().or_else(|| body.as_text());
            Err(ZendeskError::authentication(code, detail))
        }
        (status::UNPROCESSABLE_ENTITY, Some(reason)) => Err(ZendeskError::validation(&reason)),
        (code, _) => Err(ZendeskError::unspecified(code, body.clone())),
    }
}
