//! HTTP plumbing shared by the two Edge exchanges.

use aembit_core::{ClientId, Error, Result};
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::endpoint;

/// Client for a single tenant's Edge API.
pub struct EdgeClient {
    client: reqwest::Client,
    base_url: String,
    client_id: ClientId,
}

impl EdgeClient {
    /// Create a client for the tenant host derived from `client_id` and
    /// `domain`.
    pub fn new(client_id: ClientId, domain: &str) -> Self {
        let base_url = endpoint::edge_base_url(client_id.tenant(), domain);
        Self::with_base_url(client_id, base_url)
    }

    /// Point the client at an explicit base URL instead of the derived
    /// tenant host. Tests use this to target a local mock server.
    pub fn with_base_url(client_id: ClientId, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id,
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body, check the status, and decode the response body.
    ///
    /// Both Edge endpoints share this shape; the fixed access-token wording
    /// on non-success statuses is part of the caller-facing contract for the
    /// credentials call too.
    pub(crate) async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        bearer: Option<&str>,
    ) -> Result<Value> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;

        let status = response.status();
        info!(status = %status, "Response status");
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(Error::ExchangeFailed(status_text));
        }

        response
            .json()
            .await
            .map_err(|err| Error::Serialization(err.to_string()))
    }
}

/// Identity-provider-specific token wrapper sent to both endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ClientBlock<'a> {
    pub github: GithubIdentity<'a>,
}

impl<'a> ClientBlock<'a> {
    pub fn github(identity_token: &'a str) -> Self {
        Self {
            github: GithubIdentity { identity_token },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GithubIdentity<'a> {
    pub identity_token: &'a str,
}
