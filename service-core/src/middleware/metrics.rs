use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Record request count and latency, labelled by method, route and status.
///
/// The route label uses the matched route template so unknown paths collapse
/// into a single `unmatched` series.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    let labels = [("method", method), ("path", path), ("status", status)];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::{init_metrics, render_metrics};
    use axum::{body::Body, http::Request as HttpRequest, middleware, routing::get, Router};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn counts_requests_by_route() {
        init_metrics();

        let app = Router::new()
            .route("/metered", get(|| async { "ok" }))
            .route_layer(middleware::from_fn(metrics_middleware));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/metered")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_success());

        let output = render_metrics();
        assert!(output.contains("http_requests_total"));
        assert!(output.contains("path=\"/metered\""));
    }
}
