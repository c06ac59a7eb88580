// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::prelude::FromRow;

use crate::{
    error::AppError,
    utils::json::{as_int, is_truthy},
};

pub const MISSING_QUESTION_KEYS: &str = "Required question object keys missing from request body";

/// Represents the 'questions' table in the database.
/// Serializes as `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Id of the owning category. Not checked against `categories`.
    pub category: i64,

    pub difficulty: i64,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// DTO for creating a new question.
///
/// Fields are kept loosely typed so that presence and truthiness can be
/// checked before types: a `category` or `difficulty` of `0` counts as missing.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

/// DTO for `POST /search`. A missing or null term searches for "".
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, AppError> {
        let missing = || AppError::BadRequest(MISSING_QUESTION_KEYS.to_string());

        let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
            truthy(self.question),
            truthy(self.answer),
            truthy(self.category),
            truthy(self.difficulty),
        ) else {
            return Err(missing());
        };

        Ok(NewQuestion {
            question: text(question).ok_or_else(missing)?,
            answer: text(answer).ok_or_else(missing)?,
            category: as_int(&category).ok_or_else(missing)?,
            difficulty: as_int(&difficulty).ok_or_else(missing)?,
        })
    }
}

fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

fn text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateQuestionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_complete_payload() {
        let new = request(json!({
            "question": "Who invented the personal computer?",
            "answer": "Steve Wozniak",
            "category": 4,
            "difficulty": "2"
        }))
        .validate()
        .unwrap();

        assert_eq!(new.category, 4);
        assert_eq!(new.difficulty, 2);
        assert_eq!(new.answer, "Steve Wozniak");
    }

    #[test]
    fn zero_counts_as_missing() {
        let err = request(json!({"question": "Q", "answer": "A", "category": 0, "difficulty": 1}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == MISSING_QUESTION_KEYS));

        let err = request(json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 0}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn empty_and_null_fields_are_rejected() {
        assert!(request(json!({})).validate().is_err());
        assert!(
            request(json!({"question": "", "answer": "A", "category": 1, "difficulty": 1}))
                .validate()
                .is_err()
        );
        assert!(
            request(json!({"question": "Q", "answer": null, "category": 1, "difficulty": 1}))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(
            request(json!({"question": 5, "answer": "A", "category": 1, "difficulty": 1}))
                .validate()
                .is_err()
        );
        assert!(
            request(json!({"question": "Q", "answer": "A", "category": "art", "difficulty": 1}))
                .validate()
                .is_err()
        );
    }
}
