// src/handlers/questions.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    extract::{JsonBody, PathParam, QueryParams, path_id},
    models::{category::category_map, question::CreateQuestionRequest},
    store::DynStore,
    utils::pagination::{paginate, parse_page},
};

/// Query parameters for listing questions.
/// `page` stays a string so that garbage falls back to "no pagination" instead of a 400.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// Lists questions, ten per page, together with all categories.
///
/// `total_questions` always counts the full table; page 0 (or no page) returns every question.
pub async fn list_questions(
    State(store): State<DynStore>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.categories().await.map_err(|e| {
        tracing::error!("Failed to fetch categories: {:?}", e);
        AppError::from(e)
    })?;
    let questions = store.questions().await.map_err(|e| {
        tracing::error!("Failed to fetch questions: {:?}", e);
        AppError::from(e)
    })?;

    let page = parse_page(params.page.as_deref());

    Ok(Json(json!({
        "questions": paginate(&questions, page),
        "total_questions": questions.len(),
        "categories": category_map(categories),
    })))
}

/// Creates a question from `{question, answer, category, difficulty}`.
/// All four must be present and truthy. The category id is not checked for existence.
pub async fn create_question(
    State(store): State<DynStore>,
    JsonBody(payload): JsonBody<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = payload.validate()?;

    let question = store.insert_question(new_question).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("Created question {} in category {}", question.id, question.category);

    Ok(Json(json!({ "question": question })))
}

/// Deletes a question by ID. Deletion is permanent.
pub async fn delete_question(
    State(store): State<DynStore>,
    PathParam(question_id): PathParam<u64>,
) -> Result<impl IntoResponse, AppError> {
    let question_id = path_id(question_id)?;
    let not_found = || AppError::NotFound(format!("No question found with id: {}", question_id));

    // Check existence
    store.question(question_id).await?.ok_or_else(not_found)?;

    // A concurrent delete may win between the lookup and here
    if !store.delete_question(question_id).await? {
        return Err(not_found());
    }

    tracing::info!("Deleted question {}", question_id);

    Ok(Json(json!({ "deleted": question_id })))
}
