//! HTTP API server for the order-management system.
//!
//! Provides REST endpoints for orders and the article catalog, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post};
use metrics_exporter_prometheus::PrometheusHandle;
use store::{ArticleStore, OrderStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, A>(state: Arc<AppState<S, A>>, metrics_handle: PrometheusHandle) -> Router
where
    S: OrderStore + 'static,
    A: ArticleStore + Clone + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", get(routes::orders::list::<S, A>))
        .route("/orders", post(routes::orders::create::<S, A>))
        .route("/orders/{order_number}", get(routes::orders::get::<S, A>))
        .route(
            "/orders/{order_number}",
            patch(routes::orders::patch::<S, A>),
        )
        .route("/articles", get(routes::articles::list::<S, A>))
        .route("/articles", post(routes::articles::create::<S, A>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state from a pair of stores.
pub fn create_default_state<S, A>(orders: S, articles: A) -> Arc<AppState<S, A>>
where
    S: OrderStore + 'static,
    A: ArticleStore + Clone + 'static,
{
    use domain::OrderService;

    Arc::new(AppState {
        order_service: OrderService::new(orders, articles.clone()),
        articles,
    })
}
