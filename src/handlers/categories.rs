// src/handlers/categories.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    extract::{PathParam, path_id},
    models::category::category_map,
    store::DynStore,
};

/// Lists every category as an `{id: type}` map.
pub async fn list_categories(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let categories = store.categories().await.map_err(|e| {
        tracing::error!("Failed to fetch categories: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(json!({
        "categories": category_map(categories),
    })))
}

/// Lists the questions of one category.
///
/// Category `0` is rejected; unknown non-zero ids simply yield an empty list.
pub async fn questions_by_category(
    State(store): State<DynStore>,
    PathParam(category_id): PathParam<u64>,
) -> Result<impl IntoResponse, AppError> {
    let category_id = path_id(category_id)?;
    if category_id == 0 {
        return Err(AppError::BadRequest("Invalid category id".to_string()));
    }

    let questions = store.questions_in_category(category_id).await?;

    Ok(Json(json!({
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": category_id,
    })))
}
