//! GitHub OIDC identity token retrieval.

use aembit_core::{Error, IdentityTokenProvider, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Identity token provider backed by the GitHub Actions OIDC issuer.
///
/// Available when the workflow grants the step `id-token: write`; the runner
/// then injects the request URL and bearer token into the environment.
pub struct GithubIdentityProvider {
    client: reqwest::Client,
    request_url: String,
    request_token: String,
}

impl GithubIdentityProvider {
    pub fn new(request_url: impl Into<String>, request_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            request_url: request_url.into(),
            request_token: request_token.into(),
        }
    }

    /// Build from the `ACTIONS_ID_TOKEN_REQUEST_*` runner variables.
    pub fn from_env() -> Result<Self> {
        let request_url = std::env::var("ACTIONS_ID_TOKEN_REQUEST_URL").map_err(|_| {
            Error::IdentityToken(
                "ACTIONS_ID_TOKEN_REQUEST_URL is not set; does the workflow grant id-token: write?"
                    .to_string(),
            )
        })?;
        let request_token = std::env::var("ACTIONS_ID_TOKEN_REQUEST_TOKEN").map_err(|_| {
            Error::IdentityToken("ACTIONS_ID_TOKEN_REQUEST_TOKEN is not set".to_string())
        })?;
        Ok(Self::new(request_url, request_token))
    }
}

#[async_trait]
impl IdentityTokenProvider for GithubIdentityProvider {
    async fn identity_token(&self, audience: &str) -> Result<String> {
        info!(audience = %audience, "Fetching identity token");

        let response = self
            .client
            .get(&self.request_url)
            .query(&[("audience", audience)])
            .bearer_auth(&self.request_token)
            .send()
            .await
            .map_err(|err| Error::IdentityToken(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::IdentityToken(format!(
                "OIDC issuer returned status {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| Error::IdentityToken(err.to_string()))?;
        body.get("value")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::IdentityToken("OIDC response did not include a token value".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn requests_token_for_audience_with_bearer_auth() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("audience", "https://a12345.id.aembit.io"))
            .and(header("Authorization", "Bearer runner-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "value": "issued-token" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = GithubIdentityProvider::new(server.uri(), "runner-token");
        let token = provider
            .identity_token("https://a12345.id.aembit.io")
            .await
            .unwrap();
        assert_eq!(token, "issued-token");
    }

    #[tokio::test]
    async fn fails_when_issuer_rejects_the_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let provider = GithubIdentityProvider::new(server.uri(), "runner-token");
        let err = provider
            .identity_token("https://a12345.id.aembit.io")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn fails_when_response_lacks_token_value() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let provider = GithubIdentityProvider::new(server.uri(), "runner-token");
        let err = provider
            .identity_token("https://a12345.id.aembit.io")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("token value"));
    }
}
