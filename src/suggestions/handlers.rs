use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    state::AppState,
    suggestions::{
        catalog::MEAL_CATALOG,
        dto::{SuggestMealsRequest, SuggestedMeal},
        services::suggest_meals,
    },
};

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/suggest-meals", post(suggest))
}

/// POST /suggest-meals { deficiencies: [{ nutrient }], allergies?: "a, b" }
///
/// Unreadable bodies get an empty list, not a 4xx.
#[instrument(skip(state, payload))]
pub async fn suggest(
    State(state): State<AppState>,
    payload: Result<Json<SuggestMealsRequest>, JsonRejection>,
) -> Json<Vec<SuggestedMeal>> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(e) => {
            warn!(error = %e, "unreadable suggest-meals body");
            return Json(Vec::new());
        }
    };

    let meals = suggest_meals(
        state.foods.as_ref(),
        &MEAL_CATALOG,
        &body.deficiencies,
        body.allergies.as_deref(),
    )
    .await;
    info!(
        deficiencies = body.deficiencies.len(),
        suggested = meals.len(),
        "meals suggested"
    );
    Json(meals)
}
