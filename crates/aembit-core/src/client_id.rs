//! Aembit client identifier parsing and validation.
//!
//! A client ID has the shape
//! `aembit:{region}:{tenant}:identity:github_idtoken:{uuid-v4}`. The tenant
//! segment doubles as the subdomain of the tenant-scoped Edge endpoints, so
//! it is extracted here once and carried alongside the raw value.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use uuid::{Uuid, Version};

/// Fixed scheme prefix for all Aembit client IDs.
pub const SCHEME: &str = "aembit";

/// A validated Aembit client identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId {
    raw: String,
    tenant: String,
}

impl ClientId {
    /// Parse and validate a raw client ID string.
    ///
    /// Checks run in positional order and short-circuit on the first
    /// malformed segment. Missing segments validate as empty strings.
    pub fn parse(raw: &str) -> Result<Self> {
        let components: Vec<&str> = raw.split(':').collect();

        if component(&components, 0) != SCHEME {
            return Err(Error::ClientIdScheme);
        }

        let tenant = component(&components, 2);
        let tenant_re = Regex::new(r"^[0-9a-f]{6}$").unwrap();
        if !tenant_re.is_match(tenant) {
            return Err(Error::ClientIdTenant);
        }

        if component(&components, 3) != "identity" {
            return Err(Error::ClientIdKind);
        }

        if component(&components, 4) != "github_idtoken" {
            return Err(Error::ClientIdTokenType);
        }

        let token = Uuid::parse_str(component(&components, 5))
            .map_err(|_| Error::ClientIdTokenValue)?;
        if token.get_version() != Some(Version::Random) {
            return Err(Error::ClientIdTokenValue);
        }

        Ok(Self {
            raw: raw.to_string(),
            tenant: tenant.to_string(),
        })
    }

    /// The full client ID as provided by the caller.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The tenant segment, used to build tenant-scoped hostnames.
    pub fn tenant(&self) -> &str {
        &self.tenant
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn component<'a>(components: &[&'a str], index: usize) -> &'a str {
    components.get(index).copied().unwrap_or("")
}
