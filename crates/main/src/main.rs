use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt as _, EnvFilter};

mod config;
mod subcommand;

use self::config::Config;

#[derive(clap::Parser)]
#[command(about = "Charts likes and reposts of a Bluesky post over time")]
struct Args {
    #[clap(flatten)]
    config: Config,
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Serves the web page and the chart generation endpoint
    Server,
    /// Generates the charts for one post link and prints the result as JSON
    Generate { link: String },
}

const CRATE_TARGETS: [&str; 6] = [
    "bluesky_client",
    "bluesky_engagement_charts",
    "bluesky_store",
    "command_use_case",
    "plotters_renderer",
    "server",
];

fn default_directives() -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{}=info", target))
        .collect::<Vec<String>>()
        .join(",")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::try_new(default_directives())?,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();
    let args = <Args as clap::Parser>::parse();
    match args.subcommand {
        Subcommand::Server => subcommand::server::run(&args.config).await,
        Subcommand::Generate { link } => subcommand::generate::run(&args.config, link).await,
    }
}
