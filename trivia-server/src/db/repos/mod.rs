//! Repository implementations for database access
//!
//! Each operation is a single query and a single round trip:
//! - conflicts are handled in SQL (no check-then-insert)
//! - partial updates bind optional values through COALESCE

pub mod questions;

pub use questions::{DbError, Question, QuestionRepo};
