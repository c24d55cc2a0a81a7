//! trivia-server: HTTP API for trivia questions
//!
//! A small CRUD service over a single `questions` table in Postgres:
//! create, fetch, list, partial update, delete, substring search, and
//! a uniformly-random draw. Every handler is one pool checkout and one
//! round trip to the store.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod seed;

pub use config::DbConfig;
pub use http::{run_server, ApiError, ServerConfig};
