use std::{path::PathBuf, sync::Arc, time::Duration};

use bluesky_client::BlueskyClient;
use bluesky_store::BlueskyStore;
use command_use_case::session::{Credentials, Session};
use plotters_renderer::PlottersRenderer;
use server::App;

#[derive(clap::Args)]
pub struct Config {
    /// Account identifier used to log in
    #[arg(long, env = "BLUESKY_USERNAME")]
    pub bluesky_username: String,
    /// App password used to log in
    #[arg(long, env = "BLUESKY_APP_PASSWORD", hide_env_values = true)]
    pub bluesky_app_password: String,
    #[arg(long, env = "BLUESKY_API_URL", default_value = bluesky_client::DEFAULT_BASE_URL)]
    pub bluesky_api_url: String,
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind_addr: String,
    /// Directory the chart images are written to and served from
    #[arg(long, env = "OUTPUT_DIR", default_value = "static")]
    pub output_dir: PathBuf,
    /// Timeout of each outbound API call
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
    /// Page cap when listing likes and reposts
    #[arg(long, env = "MAX_PAGES", default_value_t = 10)]
    pub max_pages: usize,
}

impl Config {
    pub fn build_app(&self) -> anyhow::Result<App> {
        let client = BlueskyClient::new(bluesky_client::Config {
            base_url: self.bluesky_api_url.clone(),
            max_pages: self.max_pages,
            timeout: Duration::from_secs(self.request_timeout_secs),
        })?;
        Ok(App::new(
            Arc::new(BlueskyStore::new(client)),
            Arc::new(PlottersRenderer::new(
                self.output_dir.clone(),
                server::STATIC_ROUTE.to_owned(),
            )),
            Arc::new(Session::new(Credentials {
                identifier: self.bluesky_username.clone(),
                password: self.bluesky_app_password.clone(),
            })),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(clap::Parser)]
    struct TestArgs {
        #[clap(flatten)]
        config: Config,
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let args = <TestArgs as clap::Parser>::try_parse_from([
            "test",
            "--bluesky-username",
            "alice.bsky.social",
            "--bluesky-app-password",
            "app-password",
        ])?;
        assert_eq!(args.config.bluesky_api_url, "https://bsky.social/xrpc");
        assert_eq!(args.config.bind_addr, "0.0.0.0:8000");
        assert_eq!(args.config.output_dir, PathBuf::from("static"));
        assert_eq!(args.config.request_timeout_secs, 10);
        assert_eq!(args.config.max_pages, 10);
        args.config.build_app()?;
        Ok(())
    }
}
