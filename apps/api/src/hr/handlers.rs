//! Axum route handlers for the HR coaching API.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::hr::feedback::{evaluate_answer, AnswerFeedback};
use crate::hr::questions::{find_question, questions_in, HrCategory, HrQuestion};

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub answer: String,
}

/// GET /api/v1/hr/questions?category=
pub async fn handle_list_questions(
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<&'static HrQuestion>>, AppError> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<HrCategory>)
        .transpose()
        .map_err(AppError::Validation)?;
    Ok(Json(questions_in(category)))
}

/// GET /api/v1/hr/questions/:id
pub async fn handle_get_question(
    Path(id): Path<String>,
) -> Result<Json<&'static HrQuestion>, AppError> {
    lookup(&id).map(Json)
}

/// POST /api/v1/hr/questions/:id/feedback
///
/// Scores a practice answer. Nothing is stored.
pub async fn handle_answer_feedback(
    Path(id): Path<String>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<AnswerFeedback>, AppError> {
    let question = lookup(&id)?;
    let feedback = evaluate_answer(question, &request.answer)?;
    info!(
        question = question.id,
        score = feedback.score,
        "Evaluated HR practice answer"
    );
    Ok(Json(feedback))
}

fn lookup(id: &str) -> Result<&'static HrQuestion, AppError> {
    find_question(id).ok_or_else(|| AppError::NotFound(format!("HR question '{id}' not found")))
}
