// src/handlers/search.rs

use axum::{Json, extract::State, response::IntoResponse};
use regex::RegexBuilder;
use serde_json::json;

use crate::{
    error::AppError,
    extract::JsonBody,
    models::question::{Question, SearchRequest},
    store::DynStore,
};

/// Searches question text for `searchTerm`.
///
/// The term is a case-insensitive regular expression, not a plain substring:
/// `.` or `?` in the input keep their regex meaning. An empty term matches everything,
/// and a term that does not compile is an unexpected failure (500).
pub async fn search_questions(
    State(store): State<DynStore>,
    JsonBody(payload): JsonBody<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload.search_term.unwrap_or_default();
    let questions = store.questions().await?;

    let matches = filter_questions(questions, &term)?;

    Ok(Json(json!({
        "total_questions": matches.len(),
        "questions": matches,
    })))
}

/// Keeps the questions whose text contains a match for `term`.
pub fn filter_questions(questions: Vec<Question>, term: &str) -> Result<Vec<Question>, AppError> {
    let pattern = RegexBuilder::new(term)
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(questions
        .into_iter()
        .filter(|q| pattern.is_match(&q.question))
        .collect())
}
