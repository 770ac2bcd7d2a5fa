use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub topic: String,
    pub difficulty: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: i16,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizAttemptRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic: String,
    pub score_percent: f64,
    pub correct_count: i32,
    pub total_questions: i32,
    pub created_at: DateTime<Utc>,
}
