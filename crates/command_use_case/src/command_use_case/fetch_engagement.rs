use engagement_model::value_object::{AccessToken, ChartKind, PostUri};

use crate::port::BlueskyApi;

/// Fetches the engagement timestamps of one kind.
///
/// Any failure degrades to an empty list so that one kind never blocks the
/// other.
pub async fn fetch_timestamps(
    bluesky_api: &(dyn BlueskyApi + Send + Sync),
    access_token: &AccessToken,
    post_uri: &PostUri,
    kind: ChartKind,
) -> Vec<String> {
    let result = match kind {
        ChartKind::Likes => {
            bluesky_api
                .list_like_timestamps(access_token, post_uri)
                .await
        }
        ChartKind::Reposts => {
            bluesky_api
                .list_repost_timestamps(access_token, post_uri)
                .await
        }
    };
    match result {
        Ok(timestamps) => {
            tracing::info!(%post_uri, kind = kind.slug(), count = timestamps.len(), "fetched engagement");
            timestamps
        }
        Err(e) => {
            tracing::warn!(%post_uri, kind = kind.slug(), error = %e, "engagement fetch failed");
            Vec::new()
        }
    }
}
