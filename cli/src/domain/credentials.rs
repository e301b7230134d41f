//! Service-account key parsing and JWT grant claims.
//!
//! Pure functions only. Signing and the token exchange live in
//! `crate::infra::auth`.

use serde::{Deserialize, Serialize};

use crate::domain::error::{ManagerError, ManagerResult};

/// OAuth scope covering every Dialogflow call.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
/// Grant type for exchanging a signed assertion at the token endpoint.
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
/// Lifetime requested for the assertion; Google rejects anything above an hour.
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The fields of a Google service-account JSON key this tool needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    /// Parse and sanity-check the content of a key file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` if the content is not JSON, is not a
    /// service-account key, or lacks a PEM private key.
    pub fn parse(content: &[u8]) -> ManagerResult<Self> {
        let key: Self = serde_json::from_slice(content)
            .map_err(|e| ManagerError::InvalidCredentials(e.to_string()))?;
        if key.key_type != "service_account" {
            return Err(ManagerError::InvalidCredentials(format!(
                "expected type \"service_account\", found \"{}\"",
                key.key_type
            )));
        }
        if !key.private_key.contains("PRIVATE KEY-----") {
            return Err(ManagerError::InvalidCredentials(
                "private_key is not a PEM block".to_string(),
            ));
        }
        if key.client_email.is_empty() {
            return Err(ManagerError::InvalidCredentials(
                "client_email is empty".to_string(),
            ));
        }
        Ok(key)
    }

    /// Project the key was issued for, if recorded.
    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project_id.as_deref().filter(|p| !p.is_empty())
    }
}

/// Claims of the self-signed assertion exchanged for an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AssertionClaims {
    /// Claims for `key`, issued at unix time `now`.
    #[must_use]
    pub fn new(key: &ServiceAccountKey, now: i64) -> Self {
        Self {
            iss: key.client_email.clone(),
            scope: CLOUD_PLATFORM_SCOPE.to_string(),
            aud: key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }
}
