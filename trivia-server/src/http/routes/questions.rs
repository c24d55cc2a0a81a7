//! Question endpoints
//!
//! Seven routes over the questions table. axum resolves the static
//! `/questions/random` and `/questions/search` segments ahead of the
//! `/questions/{id}` capture, so `random` is never parsed as an id.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ListParams, NewQuestion, QuestionPatch, SearchParams, Window};

/// Create question request
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub tags: Option<String>,
}

impl CreateQuestionRequest {
    fn validate(&self) -> Result<NewQuestion, ApiError> {
        Ok(NewQuestion::new(
            &self.question,
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
            &self.correct_answer,
            self.tags.as_deref(),
        )?)
    }
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuestionRequest {
    pub question: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_answer: Option<String>,
    pub tags: Option<String>,
}

impl UpdateQuestionRequest {
    fn validate(&self) -> Result<QuestionPatch, ApiError> {
        Ok(QuestionPatch::new(
            self.question.as_deref(),
            self.option_a.as_deref(),
            self.option_b.as_deref(),
            self.option_c.as_deref(),
            self.option_d.as_deref(),
            self.correct_answer.as_deref(),
            self.tags.as_deref(),
        )?)
    }
}

/// Question response
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub tags: String,
    pub created_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            option_a: q.option_a,
            option_b: q.option_b,
            option_c: q.option_c,
            option_d: q.option_d,
            correct_answer: q.correct_answer,
            tags: q.tags,
            created_at: q.created_at.to_rfc3339(),
        }
    }
}

fn to_list(questions: Vec<Question>) -> Vec<QuestionResponse> {
    questions.into_iter().map(QuestionResponse::from).collect()
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let new = req.validate()?;
    let question = QuestionRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

/// GET /questions - list questions in a skip/limit window
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let window = Window::from(params);
    let questions = QuestionRepo::new(&state.pool).list(window).await?;

    Ok(Json(to_list(questions)))
}

/// GET /questions/random - draw one random question
async fn random_question(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = QuestionRepo::new(&state.pool).random().await?;
    Ok(Json(QuestionResponse::from(question)))
}

/// GET /questions/search?q=&limit= - substring search over question/tags
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    if params.q.is_empty() {
        return Err(ApiError::Validation(
            crate::models::ValidationError::Empty { field: "q" },
        ));
    }

    let questions = QuestionRepo::new(&state.pool)
        .search(&params.q, params.limit())
        .await?;

    Ok(Json(to_list(questions)))
}

/// GET /questions/{id} - fetch a single question
async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = QuestionRepo::new(&state.pool).get(id).await?;
    Ok(Json(QuestionResponse::from(question)))
}

/// PATCH /questions/{id} - partial update
async fn patch_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateQuestionRequest>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let patch = req.validate()?;
    let question = QuestionRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(QuestionResponse::from(question)))
}

/// DELETE /questions/{id} - delete, 204 on success
async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let existed = QuestionRepo::new(&state.pool).delete(id).await?;
    if !existed {
        return Err(ApiError::NotFound {
            resource: "question",
            id: id.to_string(),
        });
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", post(create_question).get(list_questions))
        .route("/questions/random", get(random_question))
        .route("/questions/search", get(search_questions))
        .route(
            "/questions/{id}",
            get(get_question)
                .patch(patch_question)
                .delete(delete_question),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_validation() {
        let req = CreateQuestionRequest {
            question: "What color is the sky on a clear day?".into(),
            option_a: "Blue".into(),
            option_b: "Green".into(),
            option_c: "Red".into(),
            option_d: "Yellow".into(),
            correct_answer: "A".into(),
            tags: None,
        };
        let new = req.validate().unwrap();
        assert_eq!(new.tags, "");

        let bad = CreateQuestionRequest {
            correct_answer: "Q".into(),
            ..req
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn update_request_allows_partial_payload() {
        let req = UpdateQuestionRequest {
            tags: Some("science".into()),
            ..Default::default()
        };
        let patch = req.validate().unwrap();
        assert!(patch.question.is_none());
        assert_eq!(patch.tags.as_deref(), Some("science"));
    }

    #[test]
    fn response_serializes_entity_shape() {
        let q = Question {
            id: 7,
            question: "Largest planet in the solar system?".into(),
            option_a: "Earth".into(),
            option_b: "Jupiter".into(),
            option_c: "Saturn".into(),
            option_d: "Mars".into(),
            correct_answer: "B".into(),
            tags: "space".into(),
            created_at: chrono::Utc::now(),
        };

        let body = serde_json::to_value(QuestionResponse::from(q)).unwrap();
        assert_eq!(body["id"], 7);
        assert_eq!(body["correct_answer"], "B");
        assert!(body["created_at"].is_string());
    }
}
