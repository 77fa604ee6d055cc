use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, instrument};

use crate::{
    foods::dto::{FoodRecord, HealthStatus, ListParams, SearchParams},
    state::AppState,
};

/// Shorter queries are answered with an empty list without touching the store.
const MIN_QUERY_LEN: usize = 2;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/foods", get(list_foods))
        .route("/foods/search/:query", get(search_foods))
        .route("/foods/:id", get(get_food))
}

#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let record_count = match state.foods.record_count().await {
        Ok(n) => n,
        Err(e) => {
            error!(error = %e, "record_count failed");
            0
        }
    };
    Json(HealthStatus {
        status: "ok",
        mode: state.foods.mode(),
        foods_loaded: record_count > 0,
        record_count,
    })
}

#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(p): Query<ListParams>,
) -> Json<Vec<FoodRecord>> {
    match state.foods.get_all(p.limit).await {
        Ok(foods) => Json(foods),
        Err(e) => {
            error!(error = %e, limit = p.limit, "list_foods failed");
            Json(Vec::new())
        }
    }
}

#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(p): Query<SearchParams>,
) -> Json<Vec<FoodRecord>> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Json(Vec::new());
    }
    match state.foods.search(query, p.limit).await {
        Ok(foods) => Json(foods),
        Err(e) => {
            error!(error = %e, %query, "search_foods failed");
            Json(Vec::new())
        }
    }
}

#[instrument(skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FoodRecord>, (StatusCode, String)> {
    match state.foods.get_by_id(id).await {
        Ok(Some(food)) => Ok(Json(food)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Food not found".into())),
        Err(e) => {
            error!(error = %e, %id, "get_food failed");
            Err((StatusCode::NOT_FOUND, "Food not found".into()))
        }
    }
}
