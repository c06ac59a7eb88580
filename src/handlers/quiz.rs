// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{error::AppError, extract::JsonBody, models::quiz::QuizRequest, store::DynStore};

/// Picks the next quiz question at random.
///
/// Questions listed in `previous_questions` are never returned. When the pool is
/// exhausted the response is an empty object with status 200.
pub async fn next_question(
    State(store): State<DynStore>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = req.category_filter()?;
    let previous = req.previous_questions();

    let question = store
        .random_question(previous, category)
        .await
        .map_err(|e| {
            tracing::error!("Failed to pick quiz question: {:?}", e);
            AppError::from(e)
        })?;

    tracing::debug!(
        "Quiz pick: category={:?}, excluded={}, found={}",
        category,
        previous.len(),
        question.is_some()
    );

    Ok(Json(match question {
        Some(question) => json!({ "question": question }),
        None => json!({}),
    }))
}
