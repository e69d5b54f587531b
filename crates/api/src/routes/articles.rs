//! Article catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::Article;
use store::{ArticleStore, OrderStore};

use crate::error::ApiError;
use crate::routes::orders::AppState;

/// GET /articles — list the catalog.
#[tracing::instrument(skip(state))]
pub async fn list<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
) -> Result<Json<Vec<Article>>, ApiError>
where
    S: OrderStore,
    A: ArticleStore,
{
    let articles = state
        .articles
        .find_all()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(articles))
}

/// POST /articles — insert or replace a catalog article.
#[tracing::instrument(skip(state, article), fields(article_number = %article.article_number))]
pub async fn create<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    Json(article): Json<Article>,
) -> Result<(StatusCode, Json<Article>), ApiError>
where
    S: OrderStore,
    A: ArticleStore,
{
    if article.unit_price_in_cents.is_negative() {
        return Err(ApiError::BadRequest(format!(
            "Unit price must not be negative: {}",
            article.unit_price_in_cents.cents()
        )));
    }

    let saved = state
        .articles
        .save(article)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((StatusCode::CREATED, Json(saved)))
}
