pub mod bluesky_api;
pub mod chart_renderer;

pub use self::bluesky_api::{BlueskyApi, HasBlueskyApi};
pub use self::chart_renderer::{BarChart, ChartRenderer, HasChartRenderer};
