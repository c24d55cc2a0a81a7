//! Route handlers
//!
//! - health: liveness probe
//! - questions: the CRUD, search, and random endpoints

pub mod health;
pub mod questions;
