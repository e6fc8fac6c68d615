//! Port traits (hexagonal architecture).
//!
//! These traits define the interfaces between the core pipeline and the
//! workflow platform adapters.

use crate::Result;
use async_trait::async_trait;

/// Sink for step outputs and secret masking.
///
/// Implementations must honor register-then-publish: a value passed to
/// `set_output` has already been passed to `mask_secret`, so masking takes
/// effect before the value becomes observable.
pub trait OutputSink {
    /// Register a value with the platform's secret-masking facility.
    fn mask_secret(&mut self, value: &str) -> Result<()>;

    /// Emit a named step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Issuer of short-lived identity tokens bound to the caller's workflow
/// context.
#[async_trait]
pub trait IdentityTokenProvider: Send + Sync {
    /// Obtain an identity token for the given audience URL.
    async fn identity_token(&self, audience: &str) -> Result<String>;
}
