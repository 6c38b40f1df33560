use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    extractors::AppJson,
    handlers::ApiError,
    models::{CreateQuestionRequest, PageQuery, SearchRequest},
    services::{category_service::CategoryService, question_service::QuestionService, AppState},
    utils::pagination::paginate,
};

/// GET /questions?page=N - paginated question list with the category map
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let questions = QuestionService::new(state.db.clone()).list_all().await?;

    let total_questions = questions.len();
    let current_questions = paginate(query.page(), &questions);

    // Pages past the end are empty, and an empty page is a 404
    if current_questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = CategoryService::new(state.db.clone()).list_all().await?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": total_questions,
        "categories": CategoryService::id_type_map(&categories),
    })))
}

/// POST /questions - create a question
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Absent and empty fields are rejected alike
    let new_question = req
        .into_new_question()
        .ok_or(ApiError::UnprocessableEntity)?;

    let service = QuestionService::new(state.db.clone());

    // Insert failure includes a category id that references no row
    let id = service.insert(&new_question).await.map_err(|e| {
        tracing::warn!("Failed to insert question: {:?}", e);
        ApiError::UnprocessableEntity
    })?;

    tracing::info!("Created question id={}", id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Question successfully created!",
        })),
    ))
}

/// DELETE /questions/{id} - delete a question
///
/// Every failure collapses to 422, including an id that does not exist.
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = QuestionService::new(state.db.clone());

    service
        .find(id)
        .await
        .map_err(|_| ApiError::UnprocessableEntity)?
        .ok_or(ApiError::UnprocessableEntity)?;

    service
        .delete(id)
        .await
        .map_err(|_| ApiError::UnprocessableEntity)?;

    tracing::info!("Deleted question id={}", id);

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// POST /questions/search - case-insensitive substring search
///
/// Returns every match unpaginated; `total_questions` is the match count.
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let term = req.search_term.unwrap_or_default();

    if term.is_empty() {
        return Err(ApiError::UnprocessableEntity);
    }

    let matches = QuestionService::new(state.db.clone()).search(&term).await?;

    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    let total_questions = matches.len();

    Ok(Json(json!({
        "success": true,
        "questions": matches,
        "total_questions": total_questions,
    })))
}
