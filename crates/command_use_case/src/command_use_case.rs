pub mod fetch_engagement;
pub mod generate_charts;
pub mod port;
pub mod resolve_identity;
pub mod session;
