mod app;
mod handler;

use std::path::PathBuf;

use command_use_case::generate_charts::HasGenerateCharts;

pub use self::app::App;

/// Route segment the chart images are served under
pub const STATIC_ROUTE: &str = "static";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bind")]
    Bind(#[source] std::io::Error),
    #[error("serve")]
    Serve(#[source] std::io::Error),
}

pub async fn run<T: Clone + HasGenerateCharts + Send + Sync + 'static>(
    app: T,
    config: Config,
) -> Result<(), Error> {
    let router = handler::router(&config.static_dir).with_state(app);
    let tcp_listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(Error::Bind)?;
    tracing::info!(bind_addr = %config.bind_addr, "listening");
    axum::serve(tcp_listener, router)
        .await
        .map_err(Error::Serve)?;
    Ok(())
}
