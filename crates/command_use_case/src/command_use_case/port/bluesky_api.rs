use std::sync::Arc;

use engagement_model::value_object::{AccessToken, ActorId, Handle, PostUri};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

/// Remote social API. All calls except `create_session` are authenticated.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait BlueskyApi {
    async fn create_session(&self, identifier: &str, password: &str)
        -> Result<AccessToken, Error>;
    /// `Ok(None)` when the response carries no actor id.
    async fn resolve_handle(
        &self,
        access_token: &AccessToken,
        handle: &Handle,
    ) -> Result<Option<ActorId>, Error>;
    /// `Ok(None)` when the profile carries no handle.
    async fn get_profile_handle(
        &self,
        access_token: &AccessToken,
        actor_id: &ActorId,
    ) -> Result<Option<Handle>, Error>;
    /// `indexedAt` of every like of the post.
    async fn list_like_timestamps(
        &self,
        access_token: &AccessToken,
        post_uri: &PostUri,
    ) -> Result<Vec<String>, Error>;
    /// `indexedAt` of every reposter of the post.
    async fn list_repost_timestamps(
        &self,
        access_token: &AccessToken,
        post_uri: &PostUri,
    ) -> Result<Vec<String>, Error>;
}

pub trait HasBlueskyApi {
    fn bluesky_api(&self) -> Arc<dyn BlueskyApi + Send + Sync>;
}
