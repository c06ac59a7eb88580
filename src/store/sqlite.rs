// src/store/sqlite.rs

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::TriviaStore;
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// SQLite-backed store for local runs and tests.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// In-memory databases (`sqlite::memory:`) live only as long as their
    /// connection, so they get a single connection that is never recycled.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(3));
        let pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            pool_options.max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;

        tracing::info!("Database connected, running migrations...");
        sqlx::migrate!("./migrations/sqlite").run(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TriviaStore for SqliteStore {
    async fn categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn question(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn random_question(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> Result<Option<Question>, sqlx::Error> {
        // SQLite caps bound parameters, so the exclusions are sent as one JSON array.
        let exclude = serde_json::to_string(exclude).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE (?1 IS NULL OR category = ?1)
              AND id NOT IN (SELECT value FROM json_each(?2))
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(category)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:", 5)
            .await
            .expect("Failed to open in-memory database")
    }

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn migrations_seed_categories() {
        let store = memory_store().await;
        let categories = store.categories().await.unwrap();

        let labels: Vec<&str> = categories.iter().map(|c| c.category_type.as_str()).collect();
        assert_eq!(
            labels,
            ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        );
        assert_eq!(categories[0].id, 1);
    }

    #[tokio::test]
    async fn insert_then_delete() {
        let store = memory_store().await;

        let created = store.insert_question(new_question("Q1", 1)).await.unwrap();
        assert_eq!(store.question(created.id).await.unwrap(), Some(created.clone()));

        assert!(store.delete_question(created.id).await.unwrap());
        assert!(!store.delete_question(created.id).await.unwrap());
        assert_eq!(store.question(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = memory_store().await;

        let first = store.insert_question(new_question("Q1", 1)).await.unwrap();
        store.delete_question(first.id).await.unwrap();
        let second = store.insert_question(new_question("Q2", 1)).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn random_question_honours_exclusions_and_category() {
        let store = memory_store().await;
        let a = store.insert_question(new_question("A", 1)).await.unwrap();
        let b = store.insert_question(new_question("B", 1)).await.unwrap();
        let c = store.insert_question(new_question("C", 2)).await.unwrap();

        for _ in 0..10 {
            let picked = store.random_question(&[a.id], Some(1)).await.unwrap();
            assert_eq!(picked, Some(b.clone()));
        }

        let picked = store.random_question(&[a.id, b.id], None).await.unwrap();
        assert_eq!(picked, Some(c.clone()));

        let none = store.random_question(&[a.id, b.id, c.id], None).await.unwrap();
        assert_eq!(none, None);

        let empty_category = store.random_question(&[], Some(6)).await.unwrap();
        assert_eq!(empty_category, None);
    }

    #[tokio::test]
    async fn random_question_accepts_long_exclusion_lists() {
        let store = memory_store().await;
        let a = store.insert_question(new_question("A", 1)).await.unwrap();
        let b = store.insert_question(new_question("B", 2)).await.unwrap();

        // Far more ids than SQLite allows as separate parameters.
        let mut exclude: Vec<i64> = (1_000..41_000).collect();
        exclude.push(a.id);

        let picked = store.random_question(&exclude, None).await.unwrap();
        assert_eq!(picked, Some(b.clone()));

        exclude.push(b.id);
        let none = store.random_question(&exclude, None).await.unwrap();
        assert_eq!(none, None);
    }

    #[tokio::test]
    async fn questions_in_category_filters() {
        let store = memory_store().await;
        store.insert_question(new_question("A", 1)).await.unwrap();
        store.insert_question(new_question("B", 3)).await.unwrap();
        store.insert_question(new_question("C", 3)).await.unwrap();

        let in_three = store.questions_in_category(3).await.unwrap();
        assert_eq!(in_three.len(), 2);
        assert!(in_three.iter().all(|q| q.category == 3));
        assert_eq!(store.questions().await.unwrap().len(), 3);
    }
}
