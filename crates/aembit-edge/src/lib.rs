//! HTTP client for the Aembit Edge API.
//!
//! Two sequential exchanges against a tenant-scoped host: an identity token
//! for an access token, then the access token for a typed credential.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod endpoint;

pub use client::EdgeClient;
pub use endpoint::{identity_audience, AUTH_PATH, CREDENTIALS_PATH};
