//! HubSpot API client library for Rust.
//!
//! A small blocking client for a handful of
//! [HubSpot](https://developers.hubspot.com/docs/api/overview) endpoints:
//! transactional email, contact upsert, static list membership and workflow
//! enrollment. Each call issues exactly one HTTP request; nothing is retried
//! or cached.
//!
//! # Quick Start
//!
//! ```no_run
//! use hubspot_client::{HubSpotClient, Property, DEFAULT_BASE_URL};
//!
//! let client = HubSpotClient::with_token(DEFAULT_BASE_URL, "pat-na1-...").unwrap();
//!
//! let resp = client
//!     .contacts()
//!     .create_or_update("gord.currie@boldcommerce.com", &[Property::new("firstname", "Gord")])
//!     .unwrap();
//! let created: hubspot_client::ContactUpsertResult = resp.json().unwrap();
//! println!("vid {} (new: {})", created.vid, created.is_new);
//!
//! client.workflows().enroll("gord.currie@boldcommerce.com", 2494115).unwrap();
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

// Re-export the main public types at the crate root for convenience.
pub use client::{ContactsClient, EmailClient, HubSpotClient, ListsClient, WorkflowsClient};
pub use config::{ClientConfig, Credential, DEFAULT_BASE_URL};
pub use error::{HubSpotError, Result};
pub use models::{
    ContactBody, ContactUpsertResult, EmailEventId, ListBody, ListUpdateResult, MergeField,
    Message, Property, SendEmailRequest, SendEmailResult,
};
pub use transport::Response;
