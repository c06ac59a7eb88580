// src/models/quiz.rs

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::AppError,
    utils::json::{as_int, is_truthy},
};

pub const MISSING_QUIZ_KEYS: &str = "Required keys missing from request body";

/// DTO for requesting the next quiz question.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    /// Ids the client has already been shown. The server keeps no session state.
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,

    /// `{ "id": <category id>, ... }`; an id of 0 means any category.
    #[serde(default)]
    pub quiz_category: Option<Value>,
}

impl QuizRequest {
    /// Resolves the category filter: `None` for "any category".
    pub fn category_filter(&self) -> Result<Option<i64>, AppError> {
        let missing = || AppError::BadRequest(MISSING_QUIZ_KEYS.to_string());

        let quiz_category = self
            .quiz_category
            .as_ref()
            .filter(|c| is_truthy(c))
            .ok_or_else(missing)?;

        let id = quiz_category
            .get("id")
            .and_then(as_int)
            .ok_or_else(missing)?;

        Ok((id != 0).then_some(id))
    }

    pub fn previous_questions(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}
