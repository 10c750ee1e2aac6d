//! # gds-zendesk
//!
//! A configuration and authentication wrapper around the Zendesk helpdesk API.
//!
//! It validates credentials up front, lets the host application inject a
//! logger, exposes ticket lookup and user management, and turns the
//! responses Zendesk sends back into typed errors.
//!
//! ## Architecture
//!
//! - [`config`] - Option merging, defaults and credential validation
//! - [`classifier`] - Maps response statuses to accepted / error outcomes
//! - [`error`] - The unified error type and its [`ErrorKind`](error::ErrorKind)
//! - [`logger`] - The injectable logging capability
//! - [`models`] - Response descriptors and ticket / user payloads
//! - [`transport`] - Authenticated HTTP requests
//! - [`client`] - The [`ZendeskClient`](client::ZendeskClient) facade
//!
//! ## Configuration
//!
//! | option | required | default |
//! |---|---|---|
//! | `url` | no | `https://govuk.zendesk.com/api/v2/` |
//! | `username` | yes | |
//! | `password` | yes | |
//! | `logger` | no | [`NullLogger`](logger::NullLogger) |
//!
//! [`RawConfig::from_env`](config::RawConfig::from_env) reads
//! `ZENDESK_URL`, `ZENDESK_USERNAME` and `ZENDESK_PASSWORD`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gds_zendesk::{ZendeskClient, RawConfig, TracingLogger};
//!
//! async fn example() -> Result<(), gds_zendesk::ZendeskError> {
//!     let raw = RawConfig::from_env().with_logger(Arc::new(TracingLogger));
//!     let client = ZendeskClient::new(raw)?;
//!
//!     let ticket = client.ticket().find(35436).await?;
//!     println!("#{}: {}", ticket.id, ticket.display_subject());
//!
//!     if client.users().is_suspended("someone@example.gov.uk").await? {
//!         println!("suspended");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod tickets;
pub mod transport;
pub mod users;

pub use classifier::classify;
pub use client::ZendeskClient;
pub use config::{ClientConfig, RawConfig};
pub use error::{ErrorKind, ZendeskError};
pub use logger::{Logger, NullLogger, TracingLogger};
pub use models::{Response, ResponseBody};
