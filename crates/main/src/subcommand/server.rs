use command_use_case::{port::HasBlueskyApi as _, session::HasSession as _};

use crate::config::Config;

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let app = config.build_app()?;
    app.session()
        .ensure_authenticated(app.bluesky_api().as_ref())
        .await?;
    tracing::info!(output_dir = %config.output_dir.display(), "serving charts");
    Ok(server::run(
        app,
        server::Config {
            bind_addr: config.bind_addr.clone(),
            static_dir: config.output_dir.clone(),
        },
    )
    .await?)
}
