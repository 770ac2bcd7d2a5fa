use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::quiz::QuestionRow;
use crate::techprep::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Points awarded for a correct answer.
    pub fn points(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(QuizError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// A multiple-choice question including its answer key.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: Uuid,
    pub topic: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: Option<String>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = QuizError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let correct_option = usize::try_from(row.correct_option)
            .ok()
            .filter(|&i| i < row.options.len())
            .ok_or(QuizError::InvalidAnswerKey(row.id))?;
        Ok(Question {
            id: row.id,
            topic: row.topic,
            difficulty: row.difficulty.parse()?,
            prompt: row.prompt,
            options: row.options,
            correct_option,
            explanation: row.explanation,
        })
    }
}

/// Public view of a question: no answer key, no explanation.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub topic: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuizQuestion {
    fn from(q: &Question) -> Self {
        QuizQuestion {
            id: q.id,
            topic: q.topic.clone(),
            difficulty: q.difficulty,
            prompt: q.prompt.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: Uuid,
    pub selected_option: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSubmission {
    pub user_id: Uuid,
    pub topic: String,
    pub answers: Vec<AnswerSubmission>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Strong,
    Moderate,
    NeedsWork,
}

impl Grade {
    pub fn from_percent(percent: f64) -> Self {
        match percent {
            p if p >= 80.0 => Grade::Strong,
            p if p >= 50.0 => Grade::Moderate,
            _ => Grade::NeedsWork,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionFeedback {
    pub question_id: Uuid,
    pub selected_option: Option<usize>,
    pub correct_option: usize,
    pub correct: bool,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicScore {
    pub topic: String,
    pub correct: usize,
    pub total: usize,
    pub score_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    pub earned_points: u32,
    pub possible_points: u32,
    pub score_percent: f64,
    pub correct_count: usize,
    pub total_questions: usize,
    pub unanswered: usize,
    pub grade: Grade,
    pub by_topic: Vec<TopicScore>,
    pub feedback: Vec<QuestionFeedback>,
}
