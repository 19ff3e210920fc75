use actix_web::{web, HttpResponse, Responder};
use prometheus::{Encoder, TextEncoder};

use crate::store::OrderStore;

use super::Metrics;

/// Prometheus scrape endpoint
pub async fn metrics_handler(metrics: web::Data<Metrics>) -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = metrics.registry().gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

/// Liveness plus a store round trip
pub async fn health_handler(store: web::Data<dyn OrderStore>) -> impl Responder {
    let checked_at = chrono::Utc::now();

    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "service": "purchase-orders",
            "store": store.backend(),
            "checked_at": checked_at,
        })),
        Err(e) => {
            tracing::warn!(error = %e, store = store.backend(), "Health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "service": "purchase-orders",
                "store": store.backend(),
                "checked_at": checked_at,
                "details": e.to_string(),
            }))
        }
    }
}
