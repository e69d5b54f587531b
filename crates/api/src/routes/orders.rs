//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use common::{Order, OrderNumber};
use domain::{CreateOrderCommand, OrderService, PatchOrderCommand};
use store::{ArticleStore, OrderStore};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore, A: ArticleStore> {
    pub order_service: OrderService<S, A>,
    pub articles: A,
}

const HAL_JSON: &str = "application/hal+json";

/// GET /orders — list all persisted orders.
#[tracing::instrument(skip(state))]
pub async fn list<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
) -> Result<Json<Vec<Order>>, ApiError>
where
    S: OrderStore,
    A: ArticleStore,
{
    Ok(Json(state.order_service.get_all().await?))
}

/// POST /orders — create a new order.
///
/// Returns 201 with a hypermedia-flavored representation of the
/// created order, including its order number and a self link.
#[tracing::instrument(skip(state, cmd), fields(order_number = %cmd.order_number))]
pub async fn create<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    Json(cmd): Json<CreateOrderCommand>,
) -> Result<impl IntoResponse, ApiError>
where
    S: OrderStore,
    A: ArticleStore,
{
    let order = state.order_service.create_order(cmd).await?;

    let mut body = serde_json::to_value(&order)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    body["_links"] = serde_json::json!({
        "self": { "href": format!("/orders/{}", order.order_number) }
    });
    let body = serde_json::to_string(&body).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, HAL_JSON)],
        body,
    ))
}

/// GET /orders/:order_number — look up one order.
#[tracing::instrument(skip(state))]
pub async fn get<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    Path(order_number): Path<String>,
) -> Result<Json<Order>, ApiError>
where
    S: OrderStore,
    A: ArticleStore,
{
    let order_number = OrderNumber::new(order_number);
    let order = state
        .order_service
        .find_order_by_number(&order_number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {order_number} not found")))?;

    Ok(Json(order))
}

/// PATCH /orders/:order_number — replace an order's customer and line
/// items wholesale.
///
/// Returns 204 with no body on success; 404 when the order does not
/// exist.
#[tracing::instrument(skip(state, cmd))]
pub async fn patch<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    Path(order_number): Path<String>,
    Json(cmd): Json<PatchOrderCommand>,
) -> Result<StatusCode, ApiError>
where
    S: OrderStore,
    A: ArticleStore,
{
    let order_number = OrderNumber::new(order_number);
    state.order_service.patch_order(&order_number, cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
