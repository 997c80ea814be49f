use axum::{
    extract::Request,
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::Response,
};

/// Logs every request that did not end in a 2xx response.
///
/// Client errors are logged at `warn`, server errors at `error`. Successful requests pass
/// through silently.
pub async fn log_failed_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(%method, %path, %content_type, status = status.as_u16(), "Request failed");
    } else if !status.is_success() {
        tracing::warn!(%method, %path, %content_type, status = status.as_u16(), "Request rejected");
    }

    response
}
