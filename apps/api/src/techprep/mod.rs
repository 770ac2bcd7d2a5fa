// TechPrep: multiple-choice technical practice quizzes.
// Questions live in Postgres; scoring is pure and lives in `scoring`.

pub mod handlers;
pub mod models;
pub mod scoring;
pub mod store;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("No answers submitted")]
    NoAnswers,

    #[error("Question {0} is not part of this quiz")]
    UnknownQuestion(Uuid),

    #[error("Question {0} was answered more than once")]
    DuplicateAnswer(Uuid),

    #[error("Question {question} belongs to topic '{actual}', not '{expected}'")]
    TopicMismatch {
        question: Uuid,
        actual: String,
        expected: String,
    },

    #[error("Unknown difficulty '{0}'")]
    InvalidDifficulty(String),

    #[error("Question {0} has an answer key outside its options")]
    InvalidAnswerKey(Uuid),
}
