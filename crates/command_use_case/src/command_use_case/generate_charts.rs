use std::{str::FromStr as _, sync::Arc};

use engagement_model::{
    bucket_by_day,
    value_object::{day, post_link, ArtifactId, ChartKind, Handle, PostLink, PostUri},
};

#[cfg(any(test, feature = "test-util"))]
use crate::{
    port::{BlueskyApi, ChartRenderer},
    session::Session,
};
use crate::{
    fetch_engagement::fetch_timestamps,
    port::{chart_renderer, BarChart, HasBlueskyApi, HasChartRenderer},
    resolve_identity::{resolve_actor_id, resolve_handle},
    session::{self, HasSession},
};

const WEB_APP_URL: &str = "https://bsky.app";

#[derive(Debug)]
pub struct Input {
    pub link: String,
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct Output {
    pub likes_chart: Option<String>,
    pub reposts_chart: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Authentication failed. Check your username and password.")]
    Authentication(#[source] session::Error),
    #[error("actor id not found for handle {0}")]
    ActorNotFound(Handle),
    #[error("Invalid link format.")]
    InvalidLink(#[source] post_link::Error),
    #[error("chart render: {0}")]
    Render(#[source] chart_renderer::Error),
    #[error("timestamp: {0}")]
    Timestamp(#[source] day::Error),
}

#[async_trait::async_trait]
pub trait GenerateCharts: HasBlueskyApi + HasChartRenderer + HasSession {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let bluesky_api = self.bluesky_api();
        let access_token = self
            .session()
            .ensure_authenticated(bluesky_api.as_ref())
            .await
            .map_err(Error::Authentication)?;

        let post_link = PostLink::from_str(&input.link).map_err(Error::InvalidLink)?;
        let (actor_id, handle) = match &post_link {
            PostLink::ByActor { actor_id, .. } => (
                actor_id.clone(),
                resolve_handle(bluesky_api.as_ref(), &access_token, actor_id).await,
            ),
            PostLink::ByHandle { handle, .. } => (
                resolve_actor_id(bluesky_api.as_ref(), &access_token, handle)
                    .await
                    .ok_or_else(|| Error::ActorNotFound(handle.clone()))?,
                Some(handle.clone()),
            ),
        };
        let post_uri = PostUri::new(actor_id, post_link.post_id().clone());
        let author = handle
            .map(|handle| handle.to_string())
            .unwrap_or_else(|| post_uri.actor_id().to_string());

        let mut engagement = Vec::with_capacity(2);
        for kind in [ChartKind::Likes, ChartKind::Reposts] {
            let timestamps =
                fetch_timestamps(bluesky_api.as_ref(), &access_token, &post_uri, kind).await;
            engagement.push((kind, timestamps));
        }

        let chart_renderer = self.chart_renderer();
        let artifact_id = ArtifactId::generate();
        let mut output = Output::default();
        for (kind, timestamps) in engagement {
            if timestamps.is_empty() {
                tracing::info!(kind = kind.slug(), "no engagement, skipping chart");
                continue;
            }
            let buckets = bucket_by_day(&timestamps).map_err(Error::Timestamp)?;
            let chart = BarChart {
                color: kind.color(),
                counts: buckets.iter().map(|bucket| bucket.count).collect(),
                file_name: kind.file_name(artifact_id),
                labels: buckets.iter().map(|bucket| bucket.day.to_string()).collect(),
                subtitle: match kind {
                    ChartKind::Likes => Some(format!(
                        "Post: {}/profile/{}/post/{}",
                        WEB_APP_URL,
                        author,
                        post_uri.post_id()
                    )),
                    ChartKind::Reposts => None,
                },
                title: format!("{} Over Time for @{}", kind.label(), author),
                x_label: "Date".to_owned(),
                y_label: kind.y_label(),
            };
            let path = chart_renderer.render(chart).await.map_err(Error::Render)?;
            match kind {
                ChartKind::Likes => output.likes_chart = Some(path),
                ChartKind::Reposts => output.reposts_chart = Some(path),
            }
        }
        Ok(output)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub GenerateCharts {}

    impl HasBlueskyApi for GenerateCharts {
        fn bluesky_api(&self) -> Arc<dyn BlueskyApi + Send + Sync>;
    }

    impl HasChartRenderer for GenerateCharts {
        fn chart_renderer(&self) -> Arc<dyn ChartRenderer + Send + Sync>;
    }

    impl HasSession for GenerateCharts {
        fn session(&self) -> Arc<Session>;
    }

    #[async_trait::async_trait]
    impl GenerateCharts for GenerateCharts {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasGenerateCharts {
    fn generate_charts(&self) -> Arc<dyn GenerateCharts + Send + Sync>;
}
