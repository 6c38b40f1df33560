use axum::{extract::State, response::IntoResponse, Json};
use rand::Rng;
use serde_json::json;
use std::sync::Arc;

use crate::{
    extractors::AppJson,
    handlers::ApiError,
    models::{Question, QuizRequest},
    services::{question_service::QuestionService, AppState},
};

/// POST /quizzes - draw a random question not yet seen in this game
///
/// The pool is filtered to unseen questions before the draw, so the pick
/// always terminates; an exhausted pool is a 404 and signals the end of
/// the game.
pub async fn play_quiz(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let previous_questions = req.previous_questions.ok_or(ApiError::BadRequest)?;
    let quiz_category = req.quiz_category.ok_or(ApiError::BadRequest)?;

    let service = QuestionService::new(state.db.clone());

    // Category id 0 means "all categories"
    let pool = if quiz_category.id == 0 {
        service.list_all().await?
    } else {
        service.list_by_category(quiz_category.id).await?
    };

    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|question| !previous_questions.contains(&question.id))
        .collect();

    if candidates.is_empty() {
        return Err(ApiError::NotFound);
    }

    let pick = rand::rng().random_range(0..candidates.len());

    Ok(Json(json!({
        "success": true,
        "question": candidates[pick],
    })))
}
