use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://bsky.social/xrpc";

const PAGE_LIMIT: u8 = 100;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    /// Page cap for the paginated engagement endpoints
    pub max_pages: usize,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            max_pages: 10,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct CreateSessionRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub access_jwt: Option<String>,
    pub did: Option<String>,
    pub handle: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
pub struct ResolveHandleResponse {
    pub did: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub did: Option<String>,
    pub handle: Option<String>,
    pub indexed_at: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub created_at: Option<String>,
    pub indexed_at: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct GetLikesResponse {
    cursor: Option<String>,
    #[serde(default)]
    likes: Vec<Like>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetRepostedByResponse {
    cursor: Option<String>,
    #[serde(default)]
    reposted_by: Vec<ProfileView>,
}

trait Page {
    type Item;
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

impl Page for GetLikesResponse {
    type Item = Like;
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.likes, self.cursor)
    }
}

impl Page for GetRepostedByResponse {
    type Item = ProfileView;
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.reposted_by, self.cursor)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] InnerError);

#[derive(Debug, thiserror::Error)]
enum InnerError {
    #[error("build")]
    Build(#[source] reqwest::Error),
    #[error("decode {0}")]
    Decode(&'static str, #[source] reqwest::Error),
    #[error("request {0}")]
    Request(&'static str, #[source] reqwest::Error),
    #[error("status {0} {1}")]
    Status(&'static str, reqwest::StatusCode),
}

/// XRPC client for the Bluesky API
#[derive(Clone)]
pub struct BlueskyClient {
    config: Config,
    http_client: reqwest::Client,
}

impl BlueskyClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(InnerError::Build)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub async fn create_session(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<CreateSessionResponse, Error> {
        const METHOD: &str = "com.atproto.server.createSession";
        let response = self
            .http_client
            .post(self.url(METHOD))
            .json(&CreateSessionRequest {
                identifier,
                password,
            })
            .send()
            .await
            .map_err(|e| InnerError::Request(METHOD, e))?;
        Self::decode(METHOD, response).await
    }

    pub async fn resolve_handle(
        &self,
        access_token: &str,
        handle: &str,
    ) -> Result<ResolveHandleResponse, Error> {
        self.get(
            access_token,
            "com.atproto.identity.resolveHandle",
            &[("handle", handle.to_owned())],
        )
        .await
    }

    pub async fn get_profile(&self, access_token: &str, actor: &str) -> Result<ProfileView, Error> {
        self.get(
            access_token,
            "app.bsky.actor.getProfile",
            &[("actor", actor.to_owned())],
        )
        .await
    }

    /// Follows the cursor until exhausted or `max_pages` pages were read.
    pub async fn get_likes(&self, access_token: &str, uri: &str) -> Result<Vec<Like>, Error> {
        self.list_all::<GetLikesResponse>(access_token, "app.bsky.feed.getLikes", uri)
            .await
    }

    /// Follows the cursor until exhausted or `max_pages` pages were read.
    pub async fn get_reposted_by(
        &self,
        access_token: &str,
        uri: &str,
    ) -> Result<Vec<ProfileView>, Error> {
        self.list_all::<GetRepostedByResponse>(access_token, "app.bsky.feed.getRepostedBy", uri)
            .await
    }

    async fn list_all<P>(
        &self,
        access_token: &str,
        method: &'static str,
        uri: &str,
    ) -> Result<Vec<P::Item>, Error>
    where
        P: Page + serde::de::DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut cursor = None;
        for _ in 0..self.config.max_pages {
            let mut query = vec![("uri", uri.to_owned()), ("limit", PAGE_LIMIT.to_string())];
            if let Some(cursor) = cursor.take() {
                query.push(("cursor", cursor));
            }
            let (page, next) = self.get::<P>(access_token, method, &query).await?.into_parts();
            tracing::debug!(method, count = page.len(), "page fetched");
            items.extend(page);
            match next {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => return Ok(items),
            }
        }
        tracing::warn!(method, max_pages = self.config.max_pages, "page limit reached");
        Ok(items)
    }

    async fn get<T>(
        &self,
        access_token: &str,
        method: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .get(self.url(method))
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| InnerError::Request(method, e))?;
        Self::decode(method, response).await
    }

    async fn decode<T>(method: &'static str, response: reqwest::Response) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::from(InnerError::Status(method, status)));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| Error::from(InnerError::Decode(method, e)))
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), method)
    }
}
