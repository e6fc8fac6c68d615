//! Error types for the Aembit credential action.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Client ID errors
    #[error("Client ID should start with aembit.")]
    ClientIdScheme,

    #[error("Client ID contains invalid tenant ID.")]
    ClientIdTenant,

    #[error("Client ID does not appear to be for type identity.")]
    ClientIdKind,

    #[error("Client ID does not appear to be of type GitHub ID token.")]
    ClientIdTokenType,

    #[error("Not a valid token.")]
    ClientIdTokenValue,

    // Credential type errors
    #[error("Invalid or currently unsupported credential type. Valid credential types are: {valid}")]
    InvalidCredentialType { valid: &'static str },

    #[error("Invalid or currently unsupported credential type: {0}")]
    UnsupportedCredentialType(String),

    // Identity token shape errors
    #[error("Identity token is empty")]
    IdentityTokenEmpty,

    #[error("Identity token is not in valid JWT format")]
    IdentityTokenMalformed,

    #[error("Identity token contains invalid base64url encoding")]
    IdentityTokenEncoding,

    // Server port errors
    #[error("Provided server port value cannot be converted to a number: {0}")]
    ServerPortNotANumber(String),

    #[error("Provided server port value must be an integer: {0}")]
    ServerPortNotAnInteger(String),

    #[error("Provided server port value must be in range 0-65535: {0}")]
    ServerPortOutOfRange(String),

    // Exchange errors
    // The access-token wording is the fixed contract for HTTP failures at
    // both Edge endpoints; callers pin this text in tests.
    #[error("Failed to fetch access token: {0}")]
    ExchangeFailed(String),

    #[error("Invalid response: missing accessToken")]
    MissingAccessToken,

    #[error("No credential values were included in the server response.")]
    MissingCredentialData,

    // Output errors
    #[error("API key was missing in response from server.")]
    MissingApiKey,

    #[error("OAuthToken was missing in response from server.")]
    MissingOAuthToken,

    #[error("Google Workload Identity Federation token was missing in response from server.")]
    MissingGoogleToken,

    #[error("Username or password was missing in response from server.")]
    MissingUsernamePassword,

    #[error("AWS credentials were missing in response from server.")]
    MissingAwsCredentials,

    // Infrastructure errors
    #[error("Identity token request failed: {0}")]
    IdentityToken(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
