//! Workflow step inputs.

use clap::Parser;

/// Inputs for the credential exchange step.
///
/// GitHub Actions surfaces step inputs as `INPUT_*` environment variables;
/// the same values can be passed as flags for local runs.
#[derive(Debug, Parser)]
#[command(
    name = "aembit-action",
    version,
    about = "Exchange a workflow identity for an Aembit-managed credential"
)]
pub struct Inputs {
    /// Aembit client ID identifying this workflow.
    #[arg(long, env = "INPUT_CLIENT-ID")]
    pub client_id: String,

    /// Aembit service domain.
    #[arg(long, env = "INPUT_DOMAIN", default_value = "aembit.io")]
    pub domain: String,

    /// Host of the server the requested credential targets.
    #[arg(long, env = "INPUT_SERVER-HOST", default_value = "")]
    pub server_host: String,

    /// Port of the server the requested credential targets.
    #[arg(long, env = "INPUT_SERVER-PORT", default_value = "443")]
    pub server_port: String,

    /// Credential type to request.
    #[arg(long, env = "INPUT_CREDENTIAL-TYPE")]
    pub credential_type: String,
}

impl Inputs {
    /// Trim surrounding whitespace from every input value.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.client_id,
            &mut self.domain,
            &mut self.server_host,
            &mut self.server_port,
            &mut self.credential_type,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_with_defaults() {
        let inputs = Inputs::try_parse_from([
            "aembit-action",
            "--client-id",
            "aembit:useast2:a12345:identity:github_idtoken:uuid",
            "--credential-type",
            "ApiKey",
        ])
        .unwrap();
        assert_eq!(inputs.domain, "aembit.io");
        assert_eq!(inputs.server_host, "");
        assert_eq!(inputs.server_port, "443");
    }

    #[test]
    fn requires_client_id_and_credential_type() {
        assert!(Inputs::try_parse_from(["aembit-action"]).is_err());
        assert!(
            Inputs::try_parse_from(["aembit-action", "--credential-type", "ApiKey"]).is_err()
        );
    }

    #[test]
    fn trims_every_input_value() {
        let inputs = Inputs::try_parse_from([
            "aembit-action",
            "--client-id",
            "  aembit:useast2:a12345:identity:github_idtoken:uuid  ",
            "--credential-type",
            " ApiKey ",
            "--server-port",
            " 443 ",
        ])
        .unwrap()
        .trimmed();
        assert_eq!(
            inputs.client_id,
            "aembit:useast2:a12345:identity:github_idtoken:uuid"
        );
        assert_eq!(inputs.credential_type, "ApiKey");
        assert_eq!(inputs.server_port, "443");
    }
}
