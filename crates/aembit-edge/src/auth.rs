//! Access token exchange.

use aembit_core::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::client::{ClientBlock, EdgeClient};
use crate::endpoint;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthRequest<'a> {
    client_id: &'a str,
    client: ClientBlock<'a>,
}

impl EdgeClient {
    /// Exchange an identity token for a short-lived Edge access token.
    pub async fn exchange_access_token(&self, identity_token: &str) -> Result<String> {
        info!(url = %self.url(endpoint::AUTH_PATH), "Fetching access token");

        let body = AuthRequest {
            client_id: self.client_id().as_str(),
            client: ClientBlock::github(identity_token),
        };
        let response = self.post_json(endpoint::AUTH_PATH, &body, None).await?;

        response
            .get("accessToken")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(Error::MissingAccessToken)
    }
}
