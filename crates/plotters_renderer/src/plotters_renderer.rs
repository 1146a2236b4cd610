use std::path::{Path, PathBuf};

use command_use_case::port::{chart_renderer, BarChart, ChartRenderer};
use plotters::prelude::*;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const SIZE: (u32, u32) = (1000, 600);
const TITLE_COLOR: RGBColor = RGBColor(0xff, 0x69, 0xb4);

/// Renders bar charts as PNG files into `output_dir`.
///
/// The returned path is `<public_prefix>/<file_name>`.
pub struct PlottersRenderer {
    output_dir: PathBuf,
    public_prefix: String,
}

impl PlottersRenderer {
    pub fn new(output_dir: PathBuf, public_prefix: String) -> Self {
        Self {
            output_dir,
            public_prefix,
        }
    }
}

#[async_trait::async_trait]
impl ChartRenderer for PlottersRenderer {
    async fn render(&self, chart: BarChart) -> Result<String, chart_renderer::Error> {
        if chart.labels.len() != chart.counts.len() {
            return Err(chart_renderer::Error::from(BoxError::from(format!(
                "labels and counts must have the same length: {} vs {}",
                chart.labels.len(),
                chart.counts.len()
            ))));
        }
        if chart.labels.is_empty() {
            return Err(chart_renderer::Error::from(BoxError::from(
                "cannot render a chart without data",
            )));
        }
        if chart.file_name.contains(['/', '\\']) {
            return Err(chart_renderer::Error::from(BoxError::from(format!(
                "invalid file name {}",
                chart.file_name
            ))));
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| chart_renderer::Error::from(BoxError::from(e)))?;
        let web_path = format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            chart.file_name
        );
        let path = self.output_dir.join(&chart.file_name);
        let draw_path = path.clone();
        tokio::task::spawn_blocking(move || draw(&draw_path, &chart))
            .await
            .map_err(|e| chart_renderer::Error::from(BoxError::from(e)))?
            .map_err(chart_renderer::Error::from)?;
        tracing::info!(path = %path.display(), "chart saved");
        Ok(web_path)
    }
}

fn draw(path: &Path, chart: &BarChart) -> Result<(), BoxError> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        &chart.title,
        ("sans-serif", 24).into_font().color(&TITLE_COLOR),
    )?;
    let root = match &chart.subtitle {
        Some(subtitle) => root.titled(
            subtitle,
            ("sans-serif", 14).into_font().color(&TITLE_COLOR),
        )?,
        None => root,
    };

    let y_max = chart.counts.iter().copied().max().unwrap_or_default();
    let y_max = y_max + (y_max / 10).max(1);
    let x_max = u32::try_from(chart.labels.len())?;
    let mut chart_context = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..x_max).into_segmented(), 0usize..y_max)?;

    let labels = &chart.labels;
    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_labels(labels.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    let (r, g, b) = chart.color;
    chart_context.draw_series(
        Histogram::vertical(&chart_context)
            .style(RGBColor(r, g, b).filled())
            .margin(10)
            .data(
                chart
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(i, count)| (i as u32, *count)),
            ),
    )?;
    root.present()?;
    Ok(())
}
