//! Data models for the Zendesk API.
//!
//! This module contains the response descriptor consumed by the classifier
//! and the ticket and user payloads read from the API.

mod response;
mod ticket;
mod user;

pub use response::*;
pub use ticket::*;
pub use user::*;
