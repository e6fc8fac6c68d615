//! Aembit credential action entrypoint.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod identity;
mod inputs;
mod outputs;

use aembit_core::{
    dispatch, validate_oidc_token, validate_server_port, ClientId, CredentialType,
    IdentityTokenProvider, Result,
};
use aembit_edge::{identity_audience, EdgeClient};
use identity::GithubIdentityProvider;
use inputs::Inputs;
use outputs::GithubActionsSink;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let inputs = match Inputs::try_parse() {
        Ok(inputs) => inputs.trimmed(),
        Err(err) => err.exit(),
    };

    if let Err(err) = run(inputs).await {
        outputs::set_failed(&err.to_string());
        std::process::exit(1);
    }
}

async fn run(inputs: Inputs) -> Result<()> {
    let client_id = ClientId::parse(&inputs.client_id)?;
    info!("Client ID is valid");

    let credential_type: CredentialType = inputs.credential_type.parse()?;
    info!(credential_type = %credential_type, "Credential type is valid");

    let server_port = validate_server_port(&inputs.server_port)?;

    let provider = GithubIdentityProvider::from_env()?;
    let audience = identity_audience(client_id.tenant(), &inputs.domain);
    let identity_token = provider.identity_token(&audience).await?;
    validate_oidc_token(&identity_token)?;

    let edge = EdgeClient::new(client_id, &inputs.domain);
    let access_token = edge.exchange_access_token(&identity_token).await?;
    let credential = edge
        .exchange_credential(
            credential_type,
            &identity_token,
            &access_token,
            &inputs.server_host,
            server_port,
        )
        .await?;

    // Outputs are only ever emitted here, after every exchange succeeded.
    let mut sink = GithubActionsSink::from_env();
    dispatch(
        credential.credential_type.as_str(),
        &credential.data,
        &mut sink,
    )
}
