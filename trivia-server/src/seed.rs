//! One-shot seeding from a JSON file
//!
//! Reads an array of question objects, validates each row, and inserts
//! the ones whose question text is not already present. Re-running the
//! same file is a no-op: duplicates are skipped in SQL via
//! ON CONFLICT DO NOTHING.

use std::path::Path;

use serde::Deserialize;
use sqlx::PgPool;

use crate::db::migrations;
use crate::models::{NewQuestion, ValidationError};

/// A row of the seed file
#[derive(Debug, Deserialize)]
struct SeedRow {
    question: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    correct_answer: String,
    #[serde(default)]
    tags: Option<String>,
}

/// Seed error type
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("could not read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file is not a JSON array of questions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("seed row {index}: {source}")]
    Validation {
        index: usize,
        source: ValidationError,
    },

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Parse and validate a seed file into insertable questions.
///
/// Question text is trimmed before validation, matching the uniqueness
/// key used at insert time.
pub fn parse_seed_file(path: &Path) -> Result<Vec<NewQuestion>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let rows: Vec<SeedRow> = serde_json::from_str(&raw)?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            NewQuestion::new(
                row.question.trim(),
                &row.option_a,
                &row.option_b,
                &row.option_c,
                &row.option_d,
                &row.correct_answer,
                row.tags.as_deref(),
            )
            .map_err(|source| SeedError::Validation { index, source })
        })
        .collect()
}

/// Seed the database from a JSON file, returning the number of newly
/// inserted rows. Rows whose question text already exists are skipped.
pub async fn seed_from_file(pool: &PgPool, path: &Path) -> Result<u64, SeedError> {
    migrations::run(pool).await?;

    let questions = parse_seed_file(path)?;
    let total = questions.len();
    let mut inserted = 0;

    for q in questions {
        let result = sqlx::query(
            r#"
            INSERT INTO questions
                (question, option_a, option_b, option_c, option_d, correct_answer, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (question) DO NOTHING
            "#,
        )
        .bind(&q.question)
        .bind(&q.option_a)
        .bind(&q.option_b)
        .bind(&q.option_c)
        .bind(&q.option_d)
        .bind(q.correct_answer.as_str())
        .bind(&q.tags)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    tracing::info!(inserted, total, "Seeding complete");
    Ok(inserted)
}
