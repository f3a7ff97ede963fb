use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde_json::{Value, json};

use trivia_db::repositories;

use crate::{
    ApiState,
    error::ApiError,
    pagination::{PageQuery, paginate},
};

use super::category_map;

/// Create the category routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(list_questions_by_category),
        )
}

async fn list_categories(State(state): State<ApiState>) -> Result<Json<Value>, ApiError> {
    let categories = repositories::category::list_all(&state.pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

async fn list_questions_by_category(
    State(state): State<ApiState>,
    Path(category_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    repositories::category::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Questions reference categories by the decimal string form of the id.
    let selection =
        repositories::question::list_by_category(&state.pool, &category_id.to_string()).await?;

    let current = paginate(&selection, page.number());
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "current_category": category_id,
    })))
}
