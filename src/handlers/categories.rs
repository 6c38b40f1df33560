use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    handlers::ApiError,
    models::PageQuery,
    services::{category_service::CategoryService, question_service::QuestionService, AppState},
    utils::pagination::paginate,
};

/// GET /categories - all categories as an id -> type map
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let service = CategoryService::new(state.db.clone());

    let categories = service.list_all().await?;

    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": CategoryService::id_type_map(&categories),
    })))
}

/// GET /categories/{id}/questions - paginated questions in one category
///
/// An unknown category is a 422, matching the delete-style failure
/// convention rather than the usual 404. An empty page is not an error here.
pub async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let category = CategoryService::new(state.db.clone())
        .find(id)
        .await?
        .ok_or(ApiError::UnprocessableEntity)?;

    let questions = QuestionService::new(state.db.clone())
        .list_by_category(id)
        .await?;

    let total_questions = questions.len();
    let current_questions = paginate(query.page(), &questions);

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": total_questions,
        "current_category": category.kind,
    })))
}
