use std::str::FromStr as _;

use bluesky_client::BlueskyClient;
use command_use_case::port::{bluesky_api, BlueskyApi};
use engagement_model::value_object::{AccessToken, ActorId, Handle, PostUri};

fn build_error<E>(e: E) -> bluesky_api::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    bluesky_api::Error::from(e.into())
}

/// [`BlueskyApi`] backed by the XRPC client
pub struct BlueskyStore {
    client: BlueskyClient,
}

impl BlueskyStore {
    pub fn new(client: BlueskyClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl BlueskyApi for BlueskyStore {
    async fn create_session(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AccessToken, bluesky_api::Error> {
        let response = self
            .client
            .create_session(identifier, password)
            .await
            .map_err(build_error)?;
        let access_jwt = response
            .access_jwt
            .ok_or_else(|| build_error("accessJwt not found"))?;
        AccessToken::try_from(access_jwt).map_err(build_error)
    }

    async fn resolve_handle(
        &self,
        access_token: &AccessToken,
        handle: &Handle,
    ) -> Result<Option<ActorId>, bluesky_api::Error> {
        let response = self
            .client
            .resolve_handle(access_token.as_str(), &handle.to_string())
            .await
            .map_err(build_error)?;
        response
            .did
            .map(|did| ActorId::from_str(&did))
            .transpose()
            .map_err(build_error)
    }

    async fn get_profile_handle(
        &self,
        access_token: &AccessToken,
        actor_id: &ActorId,
    ) -> Result<Option<Handle>, bluesky_api::Error> {
        let profile = self
            .client
            .get_profile(access_token.as_str(), &actor_id.to_string())
            .await
            .map_err(build_error)?;
        profile
            .handle
            .map(|handle| Handle::from_str(&handle))
            .transpose()
            .map_err(build_error)
    }

    async fn list_like_timestamps(
        &self,
        access_token: &AccessToken,
        post_uri: &PostUri,
    ) -> Result<Vec<String>, bluesky_api::Error> {
        let likes = self
            .client
            .get_likes(access_token.as_str(), &post_uri.to_string())
            .await
            .map_err(build_error)?;
        let total = likes.len();
        let timestamps = likes
            .into_iter()
            .filter_map(|like| like.indexed_at)
            .collect::<Vec<String>>();
        if timestamps.len() != total {
            tracing::debug!(skipped = total - timestamps.len(), "likes without indexedAt");
        }
        Ok(timestamps)
    }

    async fn list_repost_timestamps(
        &self,
        access_token: &AccessToken,
        post_uri: &PostUri,
    ) -> Result<Vec<String>, bluesky_api::Error> {
        let reposted_by = self
            .client
            .get_reposted_by(access_token.as_str(), &post_uri.to_string())
            .await
            .map_err(build_error)?;
        let total = reposted_by.len();
        let timestamps = reposted_by
            .into_iter()
            .filter_map(|profile| profile.indexed_at)
            .collect::<Vec<String>>();
        if timestamps.len() != total {
            tracing::debug!(skipped = total - timestamps.len(), "reposters without indexedAt");
        }
        Ok(timestamps)
    }
}
