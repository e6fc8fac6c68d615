//! Aembit credential action core.
//!
//! Domain types, pure validators, and the output dispatcher shared across the
//! action crates. This crate does no I/O of its own; network and platform
//! concerns live behind the traits in [`ports`].

pub mod client_id;
pub mod credential;
pub mod dispatch;
pub mod error;
pub mod oidc;
pub mod ports;
pub mod server;

pub use client_id::ClientId;
pub use credential::{
    Credential, CredentialData, CredentialType, ExchangedCredential, VALID_CREDENTIAL_TYPES,
};
pub use dispatch::dispatch;
pub use error::{Error, Result};
pub use oidc::validate_oidc_token;
pub use ports::{IdentityTokenProvider, OutputSink};
pub use server::validate_server_port;
