//! Question repository
//!
//! All seven store operations over the questions table. Each call is
//! one auto-committed round trip; sessions are scoped to the call via
//! the borrowed pool.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{NewQuestion, QuestionPatch, Window};

/// Question record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: question {id}")]
    NotFound { id: i64 },

    #[error("question already exists: '{question}'")]
    Conflict { question: String },

    #[error("no questions in store")]
    Empty,
}

/// Map a unique-violation on the question column to `Conflict`.
fn map_unique(err: sqlx::Error, question: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::Conflict {
            question: question.to_owned(),
        },
        _ => DbError::Sqlx(err),
    }
}

const COLUMNS: &str =
    "id, question, option_a, option_b, option_c, option_d, correct_answer, tags, created_at";

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a question, returning the stored record.
    ///
    /// A duplicate question text surfaces as `DbError::Conflict`.
    pub async fn create(&self, new: NewQuestion) -> Result<Question, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO questions
                (question, option_a, option_b, option_c, option_d, correct_answer, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, question, option_a, option_b, option_c, option_d,
                      correct_answer, tags, created_at
            "#,
        )
        .bind(&new.question)
        .bind(&new.option_a)
        .bind(&new.option_b)
        .bind(&new.option_c)
        .bind(&new.option_d)
        .bind(new.correct_answer.as_str())
        .bind(&new.tags)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique(e, &new.question))
    }

    /// Get a single question by id.
    pub async fn get(&self, id: i64) -> Result<Question, DbError> {
        let question: Option<Question> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        question.ok_or(DbError::NotFound { id })
    }

    /// List questions in a skip/limit window, ordered by id for stable
    /// paging.
    pub async fn list(&self, window: Window) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(window.limit as i64)
        .bind(window.skip as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Partially update a question: absent patch fields keep their
    /// stored values. `id` and `created_at` are never touched.
    pub async fn update(&self, id: i64, patch: QuestionPatch) -> Result<Question, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let question: Option<Question> = sqlx::query_as(
            r#"
            UPDATE questions SET
                question = COALESCE($2, question),
                option_a = COALESCE($3, option_a),
                option_b = COALESCE($4, option_b),
                option_c = COALESCE($5, option_c),
                option_d = COALESCE($6, option_d),
                correct_answer = COALESCE($7, correct_answer),
                tags = COALESCE($8, tags)
            WHERE id = $1
            RETURNING id, question, option_a, option_b, option_c, option_d,
                      correct_answer, tags, created_at
            "#,
        )
        .bind(id)
        .bind(patch.question.as_deref())
        .bind(patch.option_a.as_deref())
        .bind(patch.option_b.as_deref())
        .bind(patch.option_c.as_deref())
        .bind(patch.option_d.as_deref())
        .bind(patch.correct_answer.map(|a| a.as_str()))
        .bind(patch.tags.as_deref())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique(e, patch.question.as_deref().unwrap_or("")))?;

        question.ok_or(DbError::NotFound { id })
    }

    /// Delete a question by id. Returns whether a row existed.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over question text and tags.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Question>, DbError> {
        let pattern = format!("%{query}%");
        let questions = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM questions
             WHERE question ILIKE $1 OR tags ILIKE $1
             LIMIT $2"
        ))
        .bind(&pattern)
        .bind(limit as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Draw one uniformly-random question.
    ///
    /// Relies on ORDER BY RANDOM(), which shuffles the whole table;
    /// fine at trivia scale.
    pub async fn random(&self) -> Result<Question, DbError> {
        let question: Option<Question> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM questions ORDER BY RANDOM() LIMIT 1"
        ))
        .fetch_optional(self.pool)
        .await?;

        question.ok_or(DbError::Empty)
    }
}
