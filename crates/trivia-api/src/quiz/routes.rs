use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use serde_json::{Value, json};

use trivia_db::repositories;

use crate::{ApiState, coerce, error::ApiError};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/quizzes", post(play_quiz))
}

/// Pick a random question not yet seen in this quiz run, optionally within a
/// category. Category id 0 (or an absent id) means "any category".
async fn play_quiz(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let data = coerce::lenient_object(&body);

    let previous: Vec<i64> = data
        .get("previous_questions")
        .and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(|v| coerce::coerce_i64(v)).collect())
        .unwrap_or_default();

    // An absent quiz_category or id defaults to 0; a present but
    // non-coercible id is a client error.
    let category_id = match data
        .get("quiz_category")
        .and_then(Value::as_object)
        .and_then(|quiz_category| quiz_category.get("id"))
    {
        Some(value) => coerce::coerce_i64(value).ok_or(ApiError::BadRequest)?,
        None => 0,
    };

    let category = (category_id != 0).then(|| category_id.to_string());

    let question =
        repositories::question::pick_random(&state.pool, category.as_deref(), &previous).await?;

    // Exhaustion is a success with a null question, not an error.
    Ok(Json(json!({
        "success": true,
        "question": question,
        "current_category": category_id,
    })))
}
