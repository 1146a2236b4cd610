use std::sync::Arc;

use command_use_case::{
    port::{BlueskyApi, ChartRenderer},
    session::Session,
};

#[derive(Clone)]
pub struct App {
    bluesky_api: Arc<dyn BlueskyApi + Send + Sync>,
    chart_renderer: Arc<dyn ChartRenderer + Send + Sync>,
    session: Arc<Session>,
}

impl App {
    pub fn new(
        bluesky_api: Arc<dyn BlueskyApi + Send + Sync>,
        chart_renderer: Arc<dyn ChartRenderer + Send + Sync>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            bluesky_api,
            chart_renderer,
            session,
        }
    }
}

impl command_use_case::generate_charts::GenerateCharts for App {}

impl command_use_case::generate_charts::HasGenerateCharts for App {
    fn generate_charts(
        &self,
    ) -> Arc<dyn command_use_case::generate_charts::GenerateCharts + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::port::HasBlueskyApi for App {
    fn bluesky_api(&self) -> Arc<dyn BlueskyApi + Send + Sync> {
        self.bluesky_api.clone()
    }
}

impl command_use_case::port::HasChartRenderer for App {
    fn chart_renderer(&self) -> Arc<dyn ChartRenderer + Send + Sync> {
        self.chart_renderer.clone()
    }
}

impl command_use_case::session::HasSession for App {
    fn session(&self) -> Arc<Session> {
        self.session.clone()
    }
}
