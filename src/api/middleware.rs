use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{web, Error};
use tracing::Instrument;
use uuid::Uuid;

use crate::metrics::Metrics;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request span, access log line, metrics and `x-request-id` header.
pub async fn observe_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let started = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().to_string();
    // Route patterns keep metric label cardinality bounded.
    let route = req.match_pattern().unwrap_or_else(|| "unmatched".to_string());
    let metrics = req.app_data::<web::Data<Metrics>>().cloned();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        route = %route,
    );

    let mut res = next.call(req).instrument(span.clone()).await?;

    let status = res.status().as_u16();
    let elapsed = started.elapsed();

    span.in_scope(|| {
        tracing::info!(
            status,
            latency_ms = elapsed.as_secs_f64() * 1000.0,
            "Handled request"
        );
    });

    if let Some(metrics) = metrics {
        metrics.record_request(&method, &route, status, elapsed.as_secs_f64());
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        res.headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    Ok(res)
}
