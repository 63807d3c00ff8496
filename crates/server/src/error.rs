use std::any::Any;

use axum::{
    Json,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::templates;

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "request failed");
        internal_error()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Fixed 500 body; details only ever go to the log.
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

/// Response for a handler that panicked, used by `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    internal_error()
}

/// 404 body in whichever format the client asked for.
///
/// JSON only when the `Accept` header takes JSON but not HTML; browsers
/// (and clients sending no `Accept` at all) get the HTML error page.
pub fn not_found(headers: &HeaderMap) -> Response {
    if wants_json(headers) {
        (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Html(templates::error_page("Page not found (404)")),
        )
            .into_response()
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let media_types = accepted_media_types(accept);
    let accepts = |wanted: &str| media_types.iter().any(|range| media_range_matches(range, wanted));

    accepts("application/json") && !(accepts("text/html") || accepts("application/xhtml+xml"))
}

/// Media ranges listed in an `Accept` header, lower-cased, skipping any
/// sent with `q=0`.
fn accepted_media_types(accept: &str) -> Vec<String> {
    accept
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let media = parts.next()?.trim().to_ascii_lowercase();
            let refused = parts.any(|param| {
                let param = param.trim();
                param
                    .strip_prefix("q=")
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .is_some_and(|q| q <= 0.0)
            });
            (!media.is_empty() && !refused).then_some(media)
        })
        .collect()
}

fn media_range_matches(range: &str, wanted: &str) -> bool {
    if range == "*/*" || range == wanted {
        return true;
    }
    match (range.split_once('/'), wanted.split_once('/')) {
        (Some((range_type, "*")), Some((wanted_type, _))) => range_type == wanted_type,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_wants_json() {
        assert!(wants_json(&accept("application/json")));
        assert!(wants_json(&accept("application/json, text/plain;q=0.5")));
        assert!(wants_json(&accept("application/json, text/html;q=0")));
    }

    #[test]
    fn test_browser_and_wildcards_get_html() {
        assert!(!wants_json(&HeaderMap::new()));
        assert!(!wants_json(&accept("*/*")));
        assert!(!wants_json(&accept(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
        )));
        assert!(!wants_json(&accept("application/json, text/html")));
        assert!(!wants_json(&accept("text/plain")));
    }

    #[test]
    fn test_media_range_matches() {
        assert!(media_range_matches("application/*", "application/json"));
        assert!(media_range_matches("text/html", "text/html"));
        assert!(!media_range_matches("text/*", "application/json"));
    }
}
