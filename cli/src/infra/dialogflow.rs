//! Dialogflow v2 REST client: implements `AgentApi` over blocking `ureq`.

use dialogflow_types::{
    BatchUpdateEntityTypesRequest, ErrorEnvelope, ExportAgentRequest, ImportAgentRequest,
    ListEntityTypesResponse, Operation, RestoreAgentRequest,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::AgentApi;
use crate::domain::config::DfConfig;
use crate::domain::credentials::ServiceAccountKey;
use crate::domain::error::{ManagerError, ManagerResult};
use crate::infra::auth::{self, AccessToken};

/// REST API generation every path is rooted at.
pub const API_VERSION: &str = "v2";

/// Build the HTTP agent shared by the token exchange and API calls.
#[must_use]
pub fn http_agent(config: &DfConfig) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(config.request_timeout())
        .user_agent(concat!("dfmanager/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Authenticated client for one Dialogflow endpoint.
pub struct DialogflowClient {
    agent: ureq::Agent,
    base_url: String,
    token: AccessToken,
}

impl std::fmt::Debug for DialogflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogflowClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DialogflowClient {
    /// Wrap an already-authenticated agent. `endpoint` excludes the version.
    #[must_use]
    pub fn new(agent: ureq::Agent, endpoint: &str, token: AccessToken) -> Self {
        Self {
            agent,
            base_url: format!("{}/{API_VERSION}", endpoint.trim_end_matches('/')),
            token,
        }
    }

    /// Authenticate with `key` and connect to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot sign a grant or the token exchange
    /// fails.
    pub fn connect(config: &DfConfig, key: &ServiceAccountKey) -> ManagerResult<Self> {
        let agent = http_agent(config);
        let token = auth::fetch_access_token(&agent, key)?;
        tracing::debug!(endpoint = config.endpoint(), "connected");
        Ok(Self::new(agent, config.endpoint(), token))
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{resource}", self.base_url)
    }

    fn authorized(&self, request: ureq::Request) -> ureq::Request {
        request.set("Authorization", &format!("Bearer {}", self.token.token))
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> ManagerResult<T> {
        tracing::debug!(%url, "POST");
        let response = self
            .authorized(self.agent.post(url))
            .send_json(body)
            .map_err(api_error)?;
        decode(response)
    }

    fn get<T: DeserializeOwned>(&self, request: ureq::Request) -> ManagerResult<T> {
        tracing::debug!(url = request.url(), "GET");
        let response = self.authorized(request).call().map_err(api_error)?;
        decode(response)
    }
}

impl AgentApi for DialogflowClient {
    fn export_agent(
        &self,
        parent: &str,
        request: &ExportAgentRequest,
    ) -> ManagerResult<Operation> {
        self.post(&self.url(&format!("{parent}:export")), request)
    }

    fn import_agent(
        &self,
        parent: &str,
        request: &ImportAgentRequest,
    ) -> ManagerResult<Operation> {
        self.post(&self.url(&format!("{parent}:import")), request)
    }

    fn restore_agent(
        &self,
        parent: &str,
        request: &RestoreAgentRequest,
    ) -> ManagerResult<Operation> {
        self.post(&self.url(&format!("{parent}:restore")), request)
    }

    fn get_operation(&self, name: &str) -> ManagerResult<Operation> {
        self.get(self.agent.get(&self.url(name)))
    }

    fn list_entity_types(
        &self,
        parent: &str,
        page_token: Option<&str>,
    ) -> ManagerResult<ListEntityTypesResponse> {
        let mut request = self.agent.get(&self.url(&format!("{parent}/entityTypes")));
        if let Some(token) = page_token {
            request = request.query("pageToken", token);
        }
        self.get(request)
    }

    fn batch_update_entity_types(
        &self,
        parent: &str,
        request: &BatchUpdateEntityTypesRequest,
    ) -> ManagerResult<Operation> {
        self.post(&self.url(&format!("{parent}/entityTypes:batchUpdate")), request)
    }
}

fn decode<T: DeserializeOwned>(response: ureq::Response) -> ManagerResult<T> {
    response
        .into_json()
        .map_err(|e| ManagerError::remote(format!("malformed response: {e}")))
}

/// Map a failed call to `Remote`, preferring the service's own message.
fn api_error(err: ureq::Error) -> ManagerError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) if !envelope.error.message.is_empty() => {
                    ManagerError::Remote(envelope.error.message)
                }
                _ => ManagerError::remote(format!("HTTP {code}")),
            }
        }
        ureq::Error::Transport(transport) => ManagerError::remote(transport.to_string()),
    }
}
