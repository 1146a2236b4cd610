use std::sync::Arc;

use engagement_model::value_object::AccessToken;
use tokio::sync::Mutex;

use crate::port::{bluesky_api, BlueskyApi};

#[derive(Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("authentication failed")]
pub struct Error(#[source] bluesky_api::Error);

/// Shared login state.
///
/// The access token is created lazily and kept until an explicit
/// re-authentication replaces it.
pub struct Session {
    access_token: Mutex<Option<AccessToken>>,
    credentials: Credentials,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            access_token: Mutex::new(None),
            credentials,
        }
    }

    /// Returns the cached access token, logging in first if there is none.
    ///
    /// The lock is held across the login so concurrent callers log in once.
    pub async fn ensure_authenticated(
        &self,
        bluesky_api: &(dyn BlueskyApi + Send + Sync),
    ) -> Result<AccessToken, Error> {
        let mut access_token = self.access_token.lock().await;
        if let Some(access_token) = access_token.as_ref() {
            return Ok(access_token.clone());
        }
        self.login(bluesky_api, &mut *access_token).await
    }

    /// Logs in again and replaces the cached access token.
    ///
    /// On failure the previous token is kept.
    pub async fn reauthenticate(
        &self,
        bluesky_api: &(dyn BlueskyApi + Send + Sync),
    ) -> Result<AccessToken, Error> {
        let mut access_token = self.access_token.lock().await;
        self.login(bluesky_api, &mut *access_token).await
    }

    async fn login(
        &self,
        bluesky_api: &(dyn BlueskyApi + Send + Sync),
        access_token: &mut Option<AccessToken>,
    ) -> Result<AccessToken, Error> {
        tracing::info!(identifier = %self.credentials.identifier, "logging in");
        let created = bluesky_api
            .create_session(&self.credentials.identifier, &self.credentials.password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "login failed");
                Error(e)
            })?;
        tracing::info!("login succeeded");
        *access_token = Some(created.clone());
        Ok(created)
    }
}

pub trait HasSession {
    fn session(&self) -> Arc<Session>;
}
