//! Axum route handlers for the TechPrep API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::techprep::models::{Question, QuizQuestion, QuizResult, QuizSubmission};
use crate::techprep::scoring::{order_and_check_topic, score_quiz};
use crate::techprep::store::{draw_questions, list_topics, load_questions, record_attempt};
use crate::techprep::QuizError;
use crate::state::AppState;

const DEFAULT_QUIZ_SIZE: i64 = 10;
const MAX_QUIZ_SIZE: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub topic: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub attempt_id: Uuid,
    pub result: QuizResult,
}

/// GET /api/v1/techprep/topics
pub async fn handle_list_topics(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(list_topics(&state.db).await?))
}

/// GET /api/v1/techprep/quiz?topic=&limit=
///
/// Draws a random quiz for a topic. Answer keys are stripped.
pub async fn handle_draw_quiz(
    State(state): State<AppState>,
    Query(query): Query<QuizQuery>,
) -> Result<Json<QuizResponse>, AppError> {
    let topic = query.topic.trim().to_lowercase();
    if topic.is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    let limit = query.limit.unwrap_or(DEFAULT_QUIZ_SIZE);
    if !(1..=MAX_QUIZ_SIZE).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_QUIZ_SIZE}"
        )));
    }

    let rows = draw_questions(&state.db, &topic, limit).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound(format!("No questions for topic '{topic}'")));
    }

    let questions = rows
        .into_iter()
        .map(Question::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(QuizResponse {
        topic,
        questions: questions.iter().map(QuizQuestion::from).collect(),
    }))
}

/// POST /api/v1/techprep/quiz/submit
///
/// Scores a submission and appends the attempt to the user's history.
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    Json(submission): Json<QuizSubmission>,
) -> Result<Json<SubmitQuizResponse>, AppError> {
    if submission.answers.is_empty() {
        return Err(QuizError::NoAnswers.into());
    }
    let topic = submission.topic.trim().to_lowercase();

    let ids: Vec<Uuid> = submission.answers.iter().map(|a| a.question_id).collect();
    let rows = load_questions(&state.db, &ids).await?;
    let questions = order_and_check_topic(rows, &ids, &topic)?;

    let result = score_quiz(&questions, &submission.answers)?;
    let attempt = record_attempt(&state.db, submission.user_id, &topic, &result).await?;

    Ok(Json(SubmitQuizResponse {
        attempt_id: attempt.id,
        result,
    }))
}
