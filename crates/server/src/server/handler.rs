mod generate_charts;
mod get_root;

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use command_use_case::generate_charts::HasGenerateCharts;

use super::STATIC_ROUTE;

pub fn router<T: Clone + HasGenerateCharts + Send + Sync + 'static>(
    static_dir: &Path,
) -> Router<T> {
    Router::new()
        .merge(generate_charts::router())
        .merge(get_root::router())
        .nest_service(&format!("/{}", STATIC_ROUTE), ServeDir::new(static_dir))
}
