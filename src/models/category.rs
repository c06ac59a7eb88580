// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
/// Rows are seeded by the migrations and never written through the API.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Category label, e.g. "Science".
    /// Mapped from the column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// `{ <id>: <type> }` as returned under the `categories` key.
/// serde_json renders the integer keys as strings.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keys_serialize_as_strings() {
        let map = category_map(vec![
            Category { id: 2, category_type: "Art".into() },
            Category { id: 1, category_type: "Science".into() },
        ]);

        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
