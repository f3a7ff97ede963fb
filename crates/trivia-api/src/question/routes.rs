use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde_json::{Map, Value, json};

use trivia_db::{models::NewQuestion, repositories};

use crate::{
    ApiState, category, coerce,
    error::ApiError,
    pagination::{PageQuery, paginate},
};

const UPDATABLE_FIELDS: [&str; 4] = ["question", "answer", "category", "difficulty"];

/// Create the question routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route(
            "/questions/{question_id}",
            delete(delete_question).put(update_question),
        )
}

async fn list_questions(
    State(state): State<ApiState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let selection = repositories::question::list_all_desc(&state.pool).await?;

    let current = paginate(&selection, page.number());
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = repositories::category::list_all(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "categories": category::category_map(&categories),
        "current_category": Value::Null,
    })))
}

/// Search and create share `POST /questions` on the wire but are two
/// separate operations: search when a non-blank `searchTerm` (or legacy
/// `search`) key is present, create otherwise.
async fn create_or_search(
    State(state): State<ApiState>,
    Query(page): Query<PageQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let data = coerce::lenient_object(&body);

    let term = coerce::non_blank_str(&data, "searchTerm")
        .or_else(|| coerce::non_blank_str(&data, "search"));

    match term {
        Some(term) => search_questions(&state, &page, term)
            .await
            .map(IntoResponse::into_response),
        None => create_question(&state, &data)
            .await
            .map(IntoResponse::into_response),
    }
}

async fn search_questions(
    state: &ApiState,
    page: &PageQuery,
    term: &str,
) -> Result<Json<Value>, ApiError> {
    let selection = repositories::question::search(&state.pool, term).await?;

    // Zero matches is a success, not a 404.
    let current = paginate(&selection, page.number());

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "current_category": Value::Null,
    })))
}

async fn create_question(
    state: &ApiState,
    data: &Map<String, Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    // Validated as non-blank but stored untrimmed.
    let question = data
        .get("question")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::BadRequest)?;
    let answer = data
        .get("answer")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::BadRequest)?;
    let category = data
        .get("category")
        .and_then(|v| coerce::coerce_string(v))
        .ok_or(ApiError::BadRequest)?;
    let difficulty = data
        .get("difficulty")
        .and_then(|v| coerce::coerce_i64(v))
        .ok_or(ApiError::BadRequest)?;

    let new = NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    };

    // Dropping the transaction on any error path rolls the insert back.
    let mut tx = state.pool.begin().await?;
    let created = repositories::question::insert(&mut *tx, &new)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    let total = repositories::question::count_all(&mut *tx)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    tx.commit().await.map_err(|_| ApiError::Unprocessable)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "created": created.id,
            "question": created,
            "total_questions": total,
        })),
    ))
}

async fn delete_question(
    State(state): State<ApiState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let mut tx = state.pool.begin().await?;

    // Existence is checked first so a repeated delete is a deterministic 404.
    repositories::question::find_by_id(&mut *tx, question_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    repositories::question::delete(&mut *tx, question_id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    tx.commit().await.map_err(|_| ApiError::Unprocessable)?;

    Ok(Json(json!({
        "success": true,
        "deleted_question": question_id,
    })))
}

async fn update_question(
    State(state): State<ApiState>,
    Path(question_id): Path<i64>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let data = coerce::lenient_object(&body);

    let mut tx = state.pool.begin().await?;

    let mut question = repositories::question::find_by_id(&mut *tx, question_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if !UPDATABLE_FIELDS.iter().any(|key| data.contains_key(*key)) {
        return Err(ApiError::BadRequest);
    }

    if let Some(value) = data.get("question") {
        question.question = coerce::coerce_string(value).ok_or(ApiError::BadRequest)?;
    }
    if let Some(value) = data.get("answer") {
        question.answer = coerce::coerce_string(value).ok_or(ApiError::BadRequest)?;
    }
    if let Some(value) = data.get("category") {
        question.category = coerce::coerce_string(value).ok_or(ApiError::BadRequest)?;
    }
    if let Some(value) = data.get("difficulty") {
        question.difficulty = coerce::coerce_i64(value).ok_or(ApiError::BadRequest)?;
    }

    repositories::question::update(&mut *tx, &question)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    tx.commit().await.map_err(|_| ApiError::Unprocessable)?;

    Ok(Json(json!({
        "success": true,
        "updated": question.id,
        "question": question,
    })))
}
