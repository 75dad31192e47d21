//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of bytes of a request or response body that is logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The method, path and query of the request are logged at the `info` level
/// along with the start of each body.
/// Bodies longer than [LOG_BODY_LENGTH_LIMIT] bytes are truncated and the full
/// body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Some(body_text) = read_body(body).await else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    log_request(&parts, &body_text);

    let response = next.run(Request::from_parts(parts, body_text.into())).await;

    let (parts, body) = response.into_parts();
    let Some(body_text) = read_body(body).await else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn read_body(body: Body) -> Option<String> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read body: {error}"))
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).to_string())
}

/// The first [LOG_BODY_LENGTH_LIMIT] bytes of `body`, shortened to the nearest
/// character boundary, or `None` if the body fits.
fn truncate_body(body: &str) -> Option<&str> {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return None;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    Some(&body[..end])
}

fn log_request(parts: &request::Parts, body: &str) {
    let method = &parts.method;
    let path = parts.uri.path();
    let query = parts.uri.query().unwrap_or_default();

    match truncate_body(body) {
        Some(start) => {
            tracing::info!("Received request: {method} {path} query: {query:?} body: {start}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {method} {path} query: {query:?} body: {body:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    let status = parts.status;

    match truncate_body(body) {
        Some(start) => {
            tracing::info!("Sending response: {status} body: {start}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {status} body: {body:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{LOG_BODY_LENGTH_LIMIT, truncate_body};

    #[test]
    fn short_body_is_not_truncated() {
        assert_eq!(truncate_body("{amount} > 100"), None);
    }

    #[test]
    fn long_body_is_truncated_to_limit() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        assert_eq!(truncate_body(&body).map(str::len), Some(LOG_BODY_LENGTH_LIMIT));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = format!("{}€€", "a".repeat(LOG_BODY_LENGTH_LIMIT - 1));

        let start = truncate_body(&body).unwrap();

        assert_eq!(start, "a".repeat(LOG_BODY_LENGTH_LIMIT - 1));
    }
}
