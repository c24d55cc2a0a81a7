//! Domain models and input validation
//!
//! Inputs cross the HTTP boundary as raw strings and are promoted to
//! validated types here before any query runs.

pub mod params;
pub mod question;
pub mod validation;

pub use params::{ListParams, SearchParams, Window};
pub use question::{Answer, NewQuestion, QuestionPatch};
pub use validation::ValidationError;
