use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

/// Bar chart of one value per category.
///
/// `labels` and `counts` are parallel sequences.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BarChart {
    pub color: (u8, u8, u8),
    pub counts: Vec<usize>,
    pub file_name: String,
    pub labels: Vec<String>,
    pub subtitle: Option<String>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait ChartRenderer {
    /// Writes the chart image and returns the web path it is served from.
    async fn render(&self, chart: BarChart) -> Result<String, Error>;
}

pub trait HasChartRenderer {
    fn chart_renderer(&self) -> Arc<dyn ChartRenderer + Send + Sync>;
}
