use actix_web::{web, HttpResponse};

use crate::domain::order::NewOrder;
use crate::metrics::Metrics;
use crate::store::OrderStore;

use super::error::ApiError;

// ============================================================================
// Order Handlers
// ============================================================================
//
// Each handler makes exactly one store call; the store owns the transaction.
//
// ============================================================================

pub async fn list_orders(
    store: web::Data<dyn OrderStore>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse, ApiError> {
    let result = store.list().await;
    metrics.record_operation("list", &result);

    Ok(HttpResponse::Ok().json(result?))
}

pub async fn get_order(
    store: web::Data<dyn OrderStore>,
    metrics: web::Data<Metrics>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();
    let result = store.get(order_id).await;
    metrics.record_operation("get", &result);

    Ok(HttpResponse::Ok().json(result?))
}

pub async fn create_order(
    store: web::Data<dyn OrderStore>,
    metrics: web::Data<Metrics>,
    body: web::Json<NewOrder>,
) -> Result<HttpResponse, ApiError> {
    let result = store.create(body.into_inner()).await;
    metrics.record_operation("create", &result);

    Ok(HttpResponse::Ok().json(result?))
}

pub async fn replace_order(
    store: web::Data<dyn OrderStore>,
    metrics: web::Data<Metrics>,
    path: web::Path<i64>,
    body: web::Json<NewOrder>,
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();
    let result = store.replace(order_id, body.into_inner()).await;
    metrics.record_operation("replace", &result);

    Ok(HttpResponse::Ok().json(result?))
}

pub async fn delete_order(
    store: web::Data<dyn OrderStore>,
    metrics: web::Data<Metrics>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();
    let result = store.delete(order_id).await;
    metrics.record_operation("delete", &result);
    result?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Order deleted successfully"
    })))
}
