use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json, Router,
};

use command_use_case::{self, generate_charts::HasGenerateCharts};

#[derive(serde::Deserialize, serde::Serialize)]
struct RequestBody {
    link: Option<String>,
}

#[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    likes_chart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reposts_chart: Option<String>,
}

impl From<command_use_case::generate_charts::Output> for ResponseBody {
    fn from(
        command_use_case::generate_charts::Output {
            likes_chart,
            reposts_chart,
        }: command_use_case::generate_charts::Output,
    ) -> Self {
        Self {
            likes_chart,
            reposts_chart,
        }
    }
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ErrorResponseBody {
    error: String,
}

type ErrorResponse = (StatusCode, Json<ErrorResponseBody>);

fn error_response(status_code: StatusCode, error: String) -> ErrorResponse {
    (status_code, Json(ErrorResponseBody { error }))
}

fn error_response_from_use_case_error(
    e: command_use_case::generate_charts::Error,
) -> ErrorResponse {
    use command_use_case::generate_charts::Error;
    match e {
        Error::InvalidLink(_) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Error::ActorNotFound(_) => error_response(StatusCode::NOT_FOUND, e.to_string()),
        Error::Authentication(_) | Error::Render(_) | Error::Timestamp(_) => {
            tracing::error!(error = ?e, "error generating charts");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error generating charts: {}", e),
            )
        }
    }
}

async fn handler<T: HasGenerateCharts>(
    State(state): State<T>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<Json<ResponseBody>, ErrorResponse> {
    let link = match body {
        Ok(Json(RequestBody { link: Some(link) })) => link,
        Ok(_) | Err(_) => {
            tracing::error!("no link provided");
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "No link provided".to_owned(),
            ));
        }
    };
    tracing::info!(%link, "received link");
    let use_case = state.generate_charts();
    let output = use_case
        .execute(command_use_case::generate_charts::Input { link })
        .await
        .map_err(error_response_from_use_case_error)?;
    Ok(Json(ResponseBody::from(output)))
}

pub fn router<T: Clone + HasGenerateCharts + Send + Sync + 'static>() -> Router<T> {
    Router::new().route("/generate", axum::routing::post(handler::<T>))
}

#[cfg(test)]
mod tests {
    use std::{str::FromStr as _, sync::Arc};

    use command_use_case::{
        generate_charts::{MockGenerateCharts, Output},
        port::chart_renderer,
    };
    use engagement_model::value_object::{post_link, Handle};

    use crate::server::handler::tests::{send_request, ResponseExt as _};

    use super::*;

    const LINK: &str = "https://bsky.app/profile/alice.bsky.social/post/3kgbz6sdvsq2c";

    #[tokio::test]
    async fn test_happy_path() -> anyhow::Result<()> {
        let mocks = Mocks::with_happy_path_behavior(Output {
            likes_chart: Some("static/abc-likes.png".to_owned()),
            reposts_chart: Some("static/abc-reposts.png".to_owned()),
        });
        let app = router().with_state(mocks.clone());
        let request = build_request(&RequestBody {
            link: Some(LINK.to_owned()),
        })?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.into_body_as_json::<ResponseBody>().await?,
            ResponseBody {
                likes_chart: Some("static/abc-likes.png".to_owned()),
                reposts_chart: Some("static/abc-reposts.png".to_owned()),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_likes_only() -> anyhow::Result<()> {
        let mocks = Mocks::with_happy_path_behavior(Output {
            likes_chart: Some("static/abc-likes.png".to_owned()),
            reposts_chart: None,
        });
        let app = router().with_state(mocks.clone());
        let request = build_request(&RequestBody {
            link: Some(LINK.to_owned()),
        })?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.into_body_string().await?,
            r#"{"likes_chart":"static/abc-likes.png"}"#
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_engagement() -> anyhow::Result<()> {
        let mocks = Mocks::with_happy_path_behavior(Output::default());
        let app = router().with_state(mocks.clone());
        let request = build_request(&RequestBody {
            link: Some(LINK.to_owned()),
        })?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.into_body_string().await?, "{}");
        Ok(())
    }

    #[tokio::test]
    async fn test_no_link() -> anyhow::Result<()> {
        for body in [r#"{}"#, r#"{"url":"x"}"#, "not json"] {
            let mocks = Mocks::never_called();
            let app = router().with_state(mocks.clone());
            let request = axum::http::Request::builder()
                .method(axum::http::Method::POST)
                .uri("/generate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body))?;
            let response = send_request(app, request).await?;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.into_body_as_json::<ErrorResponseBody>().await?,
                ErrorResponseBody {
                    error: "No link provided".to_owned()
                }
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_link() -> anyhow::Result<()> {
        let mocks = Mocks::with_error(command_use_case::generate_charts::Error::InvalidLink(
            post_link::Error,
        ));
        let app = router().with_state(mocks.clone());
        let request = build_request(&RequestBody {
            link: Some("https://example.com".to_owned()),
        })?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.into_body_as_json::<ErrorResponseBody>().await?,
            ErrorResponseBody {
                error: "Invalid link format.".to_owned()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_actor_not_found() -> anyhow::Result<()> {
        let mocks = Mocks::with_error(command_use_case::generate_charts::Error::ActorNotFound(
            Handle::from_str("alice.bsky.social")?,
        ));
        let app = router().with_state(mocks.clone());
        let request = build_request(&RequestBody {
            link: Some(LINK.to_owned()),
        })?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.into_body_as_json::<ErrorResponseBody>().await?,
            ErrorResponseBody {
                error: "actor id not found for handle alice.bsky.social".to_owned()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_internal_error() -> anyhow::Result<()> {
        let mocks = Mocks::with_error(command_use_case::generate_charts::Error::Render(
            chart_renderer::Error::from(build_error()),
        ));
        let app = router().with_state(mocks.clone());
        let request = build_request(&RequestBody {
            link: Some(LINK.to_owned()),
        })?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.into_body_as_json::<ErrorResponseBody>().await?,
            ErrorResponseBody {
                error: "Error generating charts: chart render: error".to_owned()
            }
        );
        Ok(())
    }

    #[derive(Clone)]
    struct Mocks {
        generate_charts: Arc<MockGenerateCharts>,
    }

    impl Mocks {
        fn never_called() -> Self {
            let mut generate_charts = MockGenerateCharts::new();
            generate_charts.expect_execute().never();
            Self {
                generate_charts: Arc::new(generate_charts),
            }
        }

        fn with_error(error: command_use_case::generate_charts::Error) -> Self {
            let mut generate_charts = MockGenerateCharts::new();
            generate_charts
                .expect_execute()
                .return_once(move |_| Err(error));
            Self {
                generate_charts: Arc::new(generate_charts),
            }
        }

        fn with_happy_path_behavior(output: Output) -> Self {
            let mut generate_charts = MockGenerateCharts::new();
            generate_charts.expect_execute().return_once(move |input| {
                assert_eq!(input.link, LINK);
                Ok(output)
            });
            Self {
                generate_charts: Arc::new(generate_charts),
            }
        }
    }

    impl command_use_case::generate_charts::HasGenerateCharts for Mocks {
        fn generate_charts(
            &self,
        ) -> Arc<dyn command_use_case::generate_charts::GenerateCharts + Send + Sync> {
            self.generate_charts.clone()
        }
    }

    fn build_error() -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::new(std::io::ErrorKind::Other, "error"))
    }

    fn build_request<T: serde::Serialize>(
        request_body: &T,
    ) -> anyhow::Result<axum::http::Request<axum::body::Body>> {
        Ok(axum::http::Request::builder()
            .method(axum::http::Method::POST)
            .uri("/generate")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(serde_json::to_string(request_body)?))?)
    }
}
