// ============================================================================
// HTTP API
// ============================================================================
//
//   GET    /orders               list every order with its line items
//   POST   /orders               create an order and its line items
//   GET    /orders/{order_id}    fetch one order
//   PUT    /orders/{order_id}    replace an order and its line items
//   DELETE /orders/{order_id}    delete an order and its line items
//   GET    /metrics              Prometheus scrape endpoint
//   GET    /health               store reachability
//
// ============================================================================

mod error;
mod handlers;
mod middleware;

use actix_cors::Cors;
use actix_web::web;

use crate::metrics;

pub use error::ApiError;
pub use middleware::observe_request;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/orders")
            .route(web::get().to(handlers::list_orders))
            .route(web::post().to(handlers::create_order)),
    )
    .service(
        web::resource("/orders/{order_id}")
            .route(web::get().to(handlers::get_order))
            .route(web::put().to(handlers::replace_order))
            .route(web::delete().to(handlers::delete_order)),
    )
    .route("/metrics", web::get().to(metrics::metrics_handler))
    .route("/health", web::get().to(metrics::health_handler));
}

/// JSON body errors answer 400 with the usual `{"detail"}` body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// Browser access for the one configured origin, with credentials.
/// Preflights from any other origin are rejected without allow headers.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(600)
}

// ============================================================================
// HTTP Tests (in-memory store)
// ============================================================================
