use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::quiz::{QuestionRow, QuizAttemptRow};
use crate::techprep::models::QuizResult;

/// Distinct question topics, alphabetical.
pub async fn list_topics(pool: &PgPool) -> Result<Vec<String>> {
    sqlx::query_scalar("SELECT DISTINCT topic FROM techprep_questions ORDER BY topic")
        .fetch_all(pool)
        .await
        .context("Failed to list TechPrep topics")
}

/// Draws up to `limit` random questions for a topic.
pub async fn draw_questions(pool: &PgPool, topic: &str, limit: i64) -> Result<Vec<QuestionRow>> {
    sqlx::query_as::<_, QuestionRow>(
        "SELECT * FROM techprep_questions WHERE topic = $1 ORDER BY random() LIMIT $2",
    )
    .bind(topic)
    .bind(limit)
    .fetch_all(pool)
    .await
    .with_context(|| format!("Failed to draw questions for topic '{topic}'"))
}

/// Loads the questions with the given ids, in no particular order.
pub async fn load_questions(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<QuestionRow>> {
    sqlx::query_as::<_, QuestionRow>("SELECT * FROM techprep_questions WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
        .context("Failed to load quiz questions")
}

/// Appends a quiz attempt. Attempts are never updated.
pub async fn record_attempt(
    pool: &PgPool,
    user_id: Uuid,
    topic: &str,
    result: &QuizResult,
) -> Result<QuizAttemptRow> {
    let attempt = sqlx::query_as::<_, QuizAttemptRow>(
        r#"
        INSERT INTO quiz_attempts
            (id, user_id, topic, score_percent, correct_count, total_questions)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(topic)
    .bind(result.score_percent)
    .bind(result.correct_count as i32)
    .bind(result.total_questions as i32)
    .fetch_one(pool)
    .await
    .context("Failed to record quiz attempt")?;

    info!(
        "Recorded quiz attempt {} for user {user_id} on '{topic}' ({}%)",
        attempt.id, attempt.score_percent
    );
    Ok(attempt)
}

/// All attempts for a user, oldest first.
pub async fn list_attempts(pool: &PgPool, user_id: Uuid) -> Result<Vec<QuizAttemptRow>> {
    sqlx::query_as::<_, QuizAttemptRow>(
        "SELECT * FROM quiz_attempts WHERE user_id = $1 ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .context("Failed to list quiz attempts")
}
