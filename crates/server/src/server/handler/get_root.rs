use axum::{response::Html, Router};

async fn handler() -> Html<&'static str> {
    Html(include_str!("get_root.html"))
}

pub fn router<T: Clone + Send + Sync + 'static>() -> Router<T> {
    Router::new().route("/", axum::routing::get(handler))
}
