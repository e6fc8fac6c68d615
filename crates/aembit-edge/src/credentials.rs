//! Credential exchange.

use aembit_core::{CredentialData, CredentialType, Error, ExchangedCredential, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::client::{ClientBlock, EdgeClient};
use crate::endpoint;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest<'a> {
    client: ClientBlock<'a>,
    server: ServerBlock<'a>,
    credential_type: &'a str,
}

#[derive(Debug, Serialize)]
struct ServerBlock<'a> {
    host: &'a str,
    port: u16,
}

impl EdgeClient {
    /// Exchange an access token for a typed credential payload.
    ///
    /// The response's own `credentialType` is validated against the known
    /// set even on a 2xx status, and the `data` payload must be present.
    /// Per-field validation of `data` is deferred to the output dispatcher.
    pub async fn exchange_credential(
        &self,
        credential_type: CredentialType,
        identity_token: &str,
        access_token: &str,
        server_host: &str,
        server_port: u16,
    ) -> Result<ExchangedCredential> {
        info!(url = %self.url(endpoint::CREDENTIALS_PATH), "Fetching credential");

        let body = CredentialsRequest {
            client: ClientBlock::github(identity_token),
            server: ServerBlock {
                host: server_host,
                port: server_port,
            },
            credential_type: credential_type.as_str(),
        };
        let response = self
            .post_json(endpoint::CREDENTIALS_PATH, &body, Some(access_token))
            .await?;

        let returned_type: CredentialType = response
            .get("credentialType")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .parse()?;

        let data = match response.get("data") {
            Some(data) if !data.is_null() => data.clone(),
            _ => return Err(Error::MissingCredentialData),
        };
        let data: CredentialData = serde_json::from_value(data)?;

        // Unparseable expirations are treated as absent, matching the lenient
        // handling of upstream expiry timestamps elsewhere in the exchange.
        let expires_at = response
            .get("expiresAt")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|expires| expires.with_timezone(&Utc));

        Ok(ExchangedCredential {
            credential_type: returned_type,
            expires_at,
            data,
        })
    }
}
