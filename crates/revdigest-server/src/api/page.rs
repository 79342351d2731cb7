use axum::{
    extract::State,
    response::Html,
    Extension, Form,
};
use revdigest_core::SummaryResult;
use revdigest_pipeline::PipelineError;
use revdigest_summarizer::format_bullet_points;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::AppState;

const EMPTY_NAME_MESSAGE: &str = "Please enter a game name.";
const NOT_FOUND_MESSAGE: &str = "Game not found or API error.";
const COLLECTION_MESSAGE: &str = "Could not fetch reviews right now. Please try again.";

#[derive(Debug, Deserialize)]
pub(super) struct SubmitForm {
    #[serde(default)]
    pub game_name: String,
}

/// What the page shows below the form.
#[derive(Debug, Default)]
struct PageView<'a> {
    game_name: &'a str,
    summaries: Option<SummaryResult>,
    error: Option<&'static str>,
}

pub(super) async fn index() -> Html<String> {
    Html(render(&PageView::default()))
}

/// `POST /`: runs the digest and renders formatted summaries.
pub(super) async fn submit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    let game_name = form.game_name.trim();
    if game_name.is_empty() {
        return Html(render(&PageView {
            error: Some(EMPTY_NAME_MESSAGE),
            ..PageView::default()
        }));
    }

    tracing::info!(request_id = %req_id.0, game = game_name, "page digest requested");
    let view = match state.pipeline.run(game_name).await {
        Ok(result) => PageView {
            game_name,
            summaries: Some(result.map(format_bullet_points)),
            error: None,
        },
        Err(PipelineError::EmptyGameName) => PageView {
            game_name,
            summaries: None,
            error: Some(EMPTY_NAME_MESSAGE),
        },
        Err(PipelineError::Collection(e)) => {
            tracing::error!(request_id = %req_id.0, error = %e, "review collection failed");
            PageView {
                game_name,
                summaries: None,
                error: Some(COLLECTION_MESSAGE),
            }
        }
        Err(e) => {
            tracing::warn!(request_id = %req_id.0, error = %e, "page digest failed");
            PageView {
                game_name,
                summaries: None,
                error: Some(NOT_FOUND_MESSAGE),
            }
        }
    };
    Html(render(&view))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render(view: &PageView<'_>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Steam Review Digest</title>\n\
         <style>body{font-family:sans-serif;max-width:48rem;margin:2rem auto}\
         .summary{white-space:pre-line}.error{color:#b00020}</style>\n\
         </head>\n<body>\n<h1>Steam Review Digest</h1>\n\
         <form method=\"post\" action=\"/\">\n",
    );
    html.push_str(&format!(
        "<input type=\"text\" name=\"game_name\" placeholder=\"Game name\" value=\"{}\">\n\
         <button type=\"submit\">Summarize</button>\n</form>\n",
        escape_html(view.game_name)
    ));

    if let Some(error) = view.error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }

    if let Some(summaries) = &view.summaries {
        html.push_str(&format!(
            "<h2>Positive Summary</h2>\n<div class=\"summary\" id=\"positive\">{}</div>\n\
             <h2>Negative Summary</h2>\n<div class=\"summary\" id=\"negative\">{}</div>\n",
            escape_html(&summaries.positive_summary),
            escape_html(&summaries.negative_summary)
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::super::build_app;
    use super::super::test_support::state;
    use super::*;

    async fn post_form(app: axum::Router, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_owned()))
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8"))
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[tokio::test]
    async fn get_renders_empty_form() {
        let (state, _) = state(Some("730"), false);
        let response = build_app(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let html = String::from_utf8(bytes.to_vec()).expect("utf-8");
        assert!(html.contains("name=\"game_name\""));
        assert!(!html.contains("Positive Summary"));
        assert!(!html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn post_renders_formatted_summaries() {
        let (state, _) = state(Some("730"), false);
        let (status, html) = post_form(build_app(state), "game_name=Portal+2").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("value=\"Portal 2\""));
        assert!(html.contains("\n• Fun co-op\n• Great levels</div>"));
        assert!(html.contains("\n• Unstable servers</div>"));
    }

    #[tokio::test]
    async fn post_blank_name_skips_pipeline() {
        let (state, source) = state(Some("730"), false);
        let (status, html) = post_form(build_app(state), "game_name=++").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(EMPTY_NAME_MESSAGE));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn post_unknown_game_shows_not_found() {
        let (state, _) = state(None, false);
        let (_, html) = post_form(build_app(state), "game_name=zzzz").await;
        assert!(html.contains(NOT_FOUND_MESSAGE));
        assert!(!html.contains("Positive Summary"));
    }

    #[tokio::test]
    async fn post_collection_failure_shows_retry_message() {
        let (state, _) = state(Some("730"), true);
        let (_, html) = post_form(build_app(state), "game_name=Portal").await;
        assert!(html.contains(COLLECTION_MESSAGE));
    }

    #[tokio::test]
    async fn post_escapes_user_input() {
        let (state, _) = state(None, false);
        let (_, html) = post_form(build_app(state), "game_name=%3Cscript%3E").await;
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }
}
