//! Client for the social-auth wallet provider

use crate::error::ClientError;
use async_trait::async_trait;
use opflow_primitives::{AuthSession, AuthType, UserProfile, Wallet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

/// Application credentials issued by the auth provider dashboard
#[derive(Clone, Debug)]
pub struct AppCredentials {
    /// Project identifier
    pub project_id: String,
    /// Client key of the project
    pub client_key: String,
    /// Application identifier
    pub app_id: String,
}

/// A trait for the auth provider establishing the session identity
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Logs the user in with the preferred auth method
    ///
    /// # Arguments
    /// * `auth_type` - The preferred auth method
    ///
    /// # Returns
    /// * `AuthSession` - The profile and session signer of the logged-in user
    async fn login(&self, auth_type: AuthType) -> Result<AuthSession, ClientError>;
}

/// HTTP client for the social-auth wallet provider
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: AppCredentials,
    chain_id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    project_id: &'a str,
    client_key: &'a str,
    app_id: &'a str,
    preferred_auth_type: AuthType,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    user_info: UserProfile,
    session_key: String,
}

impl AuthClient {
    /// Creates a new auth client
    ///
    /// # Arguments
    /// * `base_url` - Endpoint of the auth provider
    /// * `credentials` - Application credentials of the project
    /// * `chain_id` - The chain id the session signer is bound to
    ///
    /// # Returns
    /// * `Self` - A new `AuthClient` instance
    pub fn new(
        base_url: &str,
        credentials: AppCredentials,
        chain_id: u64,
    ) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|err| ClientError::Auth { inner: err.to_string() })?;
        Ok(Self { http: reqwest::Client::new(), base_url, credentials, chain_id })
    }
}

#[async_trait]
impl AuthProvider for AuthClient {
    async fn login(&self, auth_type: AuthType) -> Result<AuthSession, ClientError> {
        let url = self
            .base_url
            .join("session/login")
            .map_err(|err| ClientError::Auth { inner: err.to_string() })?;
        debug!("Logging in via {url} with auth type {auth_type}");

        let res = self
            .http
            .post(url)
            .json(&LoginRequest {
                project_id: &self.credentials.project_id,
                client_key: &self.credentials.client_key,
                app_id: &self.credentials.app_id,
                preferred_auth_type: auth_type,
            })
            .send()
            .await?
            .error_for_status()?;
        let res: LoginResponse = res.json().await?;

        let wallet = Wallet::from_key(&res.session_key, self.chain_id)
            .map_err(|err| ClientError::Auth { inner: err.to_string() })?;
        info!("Logged in as {}", res.user_info.name);

        Ok(AuthSession { profile: res.user_info, wallet })
    }
}
