//! Service-account authentication: signs a JWT grant and exchanges it for a
//! bearer token at the key's `token_uri`.
//!
//! The token is fetched once per process; a single command never outlives it.

use std::path::Path;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Deserialize;

use crate::domain::credentials::{AssertionClaims, JWT_BEARER_GRANT, ServiceAccountKey};
use crate::domain::error::{ManagerError, ManagerResult};

/// A bearer token for the Dialogflow API.
#[derive(Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// OAuth error body: `{"error": "invalid_grant", "error_description": "..."}`.
#[derive(Deserialize)]
struct OAuthError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Read and parse the service-account key file at `path`.
///
/// # Errors
///
/// Returns `Io` naming `path` if the file cannot be read, and
/// `InvalidCredentials` if its content is not a service-account key.
pub fn load_key(path: &Path) -> ManagerResult<ServiceAccountKey> {
    let content = std::fs::read(path).map_err(|e| ManagerError::io("read key file", path, e))?;
    let key = ServiceAccountKey::parse(&content)?;
    tracing::debug!(client_email = %key.client_email, "service account key loaded");
    Ok(key)
}

/// Sign the RS256 grant assertion for `key`, issued at unix time `now`.
///
/// # Errors
///
/// Returns `InvalidCredentials` if the private key cannot be used for RS256.
pub fn sign_assertion(key: &ServiceAccountKey, now: i64) -> ManagerResult<String> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid.clone_from(&key.private_key_id);

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| ManagerError::InvalidCredentials(format!("private_key: {e}")))?;
    jsonwebtoken::encode(&header, &AssertionClaims::new(key, now), &encoding_key)
        .map_err(|e| ManagerError::InvalidCredentials(e.to_string()))
}

/// Exchange a freshly signed assertion for an access token.
///
/// # Errors
///
/// Returns `InvalidCredentials` if signing fails and `Remote` if the token
/// endpoint rejects the grant or cannot be reached.
pub fn fetch_access_token(
    agent: &ureq::Agent,
    key: &ServiceAccountKey,
) -> ManagerResult<AccessToken> {
    let assertion = sign_assertion(key, chrono::Utc::now().timestamp())?;
    tracing::debug!(token_uri = %key.token_uri, "requesting access token");

    let response = agent
        .post(&key.token_uri)
        .send_form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
        .map_err(token_error)?;
    let body: TokenResponse = response
        .into_json()
        .map_err(|e| ManagerError::remote(format!("malformed token response: {e}")))?;

    Ok(AccessToken {
        token: body.access_token,
        expires_in: body.expires_in,
    })
}

fn token_error(err: ureq::Error) -> ManagerError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            match serde_json::from_str::<OAuthError>(&body) {
                Ok(oauth) => ManagerError::remote(format!(
                    "token exchange failed: {}",
                    oauth.error_description.unwrap_or(oauth.error)
                )),
                Err(_) => ManagerError::remote(format!("token exchange failed: HTTP {code}")),
            }
        }
        ureq::Error::Transport(transport) => {
            ManagerError::remote(format!("token exchange failed: {transport}"))
        }
    }
}
