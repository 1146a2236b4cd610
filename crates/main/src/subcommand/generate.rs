use command_use_case::generate_charts::{GenerateCharts as _, Input, Output};

use crate::config::Config;

#[derive(Debug, serde::Serialize)]
struct Printed {
    #[serde(skip_serializing_if = "Option::is_none")]
    likes_chart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reposts_chart: Option<String>,
}

impl From<Output> for Printed {
    fn from(
        Output {
            likes_chart,
            reposts_chart,
        }: Output,
    ) -> Self {
        Self {
            likes_chart,
            reposts_chart,
        }
    }
}

pub async fn run(config: &Config, link: String) -> anyhow::Result<()> {
    let app = config.build_app()?;
    let output = app.execute(Input { link }).await?;
    println!("{}", serde_json::to_string(&Printed::from(output))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_charts_are_omitted() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::to_string(&Printed::from(Output {
                likes_chart: Some("static/abc-likes.png".to_owned()),
                reposts_chart: None,
            }))?,
            r#"{"likes_chart":"static/abc-likes.png"}"#
        );
        assert_eq!(
            serde_json::to_string(&Printed::from(Output::default()))?,
            "{}"
        );
        Ok(())
    }
}
