//! Tenant-scoped endpoint derivation.
//!
//! Every Edge host is `https://{tenant}.{subdomain}.{domain}` where `tenant`
//! is the third colon-delimited segment of the client ID.

/// Path of the unauthenticated access-token endpoint.
pub const AUTH_PATH: &str = "/edge/v1/auth";

/// Path of the authenticated credentials endpoint.
pub const CREDENTIALS_PATH: &str = "/edge/v1/credentials";

/// Base URL of a tenant's Edge API.
pub fn edge_base_url(tenant: &str, domain: &str) -> String {
    format!("https://{tenant}.ec.{domain}")
}

/// Audience URL presented to the OIDC issuer for a tenant.
pub fn identity_audience(tenant: &str, domain: &str) -> String {
    format!("https://{tenant}.id.{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_tenant_scoped_hosts() {
        assert_eq!(edge_base_url("a12345", "aembit.io"), "https://a12345.ec.aembit.io");
        assert_eq!(
            identity_audience("a12345", "aembit.io"),
            "https://a12345.id.aembit.io"
        );
    }
}
