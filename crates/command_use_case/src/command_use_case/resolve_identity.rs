use engagement_model::value_object::{AccessToken, ActorId, Handle};

use crate::port::BlueskyApi;

/// Looks up the actor id of `handle`.
///
/// Transport failures and missing fields both yield `None`.
pub async fn resolve_actor_id(
    bluesky_api: &(dyn BlueskyApi + Send + Sync),
    access_token: &AccessToken,
    handle: &Handle,
) -> Option<ActorId> {
    match bluesky_api.resolve_handle(access_token, handle).await {
        Ok(Some(actor_id)) => {
            tracing::info!(%handle, %actor_id, "resolved actor id");
            Some(actor_id)
        }
        Ok(None) => {
            tracing::error!(%handle, "actor id not found");
            None
        }
        Err(e) => {
            tracing::error!(%handle, error = %e, "actor id resolution failed");
            None
        }
    }
}

/// Looks up the current handle of `actor_id`.
///
/// Transport failures and missing fields both yield `None`.
pub async fn resolve_handle(
    bluesky_api: &(dyn BlueskyApi + Send + Sync),
    access_token: &AccessToken,
    actor_id: &ActorId,
) -> Option<Handle> {
    match bluesky_api.get_profile_handle(access_token, actor_id).await {
        Ok(Some(handle)) => {
            tracing::info!(%actor_id, %handle, "resolved handle");
            Some(handle)
        }
        Ok(None) => {
            tracing::error!(%actor_id, "handle not found");
            None
        }
        Err(e) => {
            tracing::error!(%actor_id, error = %e, "handle resolution failed");
            None
        }
    }
}
