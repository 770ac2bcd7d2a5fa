//! Answer feedback — heuristic scoring of a practice answer to an HR question.
//!
//! Score (0–100):
//! - length: 25 for 80–250 words, 15 for 40–79 or 251–350, else 5
//! - STAR structure: 10 per element detected by cue phrases (40 max);
//!   outside behavioral questions the score is `(star + 40) / 2`
//! - quantified outcome: 20 (digit, `%`, currency symbol)
//! - ownership: 15 (first person singular)
//! - filler words: −2 each, at most −10

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hr::questions::{HrCategory, HrQuestion};

const SITUATION_CUES: &[&str] = &[
    "situation",
    "at the time",
    "when i was",
    "while working",
    "in my previous",
    "at my last",
    "back in",
    "we were",
    "during",
];

const TASK_CUES: &[&str] = &[
    "my task",
    "my role",
    "i was responsible",
    "responsible for",
    "needed to",
    "had to",
    "the goal",
    "goal was",
    "the challenge",
    "assigned",
];

const ACTION_CUES: &[&str] = &[
    "i decided",
    "i led",
    "i built",
    "i created",
    "i organized",
    "i proposed",
    "i implemented",
    "i reached out",
    "i scheduled",
    "i worked with",
    "i started",
    "so i",
];

const RESULT_CUES: &[&str] = &[
    "as a result",
    "resulted in",
    "the result",
    "outcome",
    "in the end",
    "eventually",
    "we delivered",
    "reduced",
    "increased",
    "saved",
    "learned",
];

const FILLER_WORDS: &[&str] = &["um", "uh", "like", "basically", "actually", "literally"];
const FILLER_PHRASES: &[&str] = &["you know", "kind of", "sort of"];
const OWNERSHIP_WORDS: &[&str] = &["i", "i'm", "i've", "i'd", "my", "me"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Answer cannot be empty")]
    EmptyAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerRating {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl AnswerRating {
    fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => AnswerRating::Excellent,
            s if s >= 60 => AnswerRating::Good,
            s if s >= 40 => AnswerRating::Fair,
            _ => AnswerRating::NeedsWork,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StarCoverage {
    pub situation: bool,
    pub task: bool,
    pub action: bool,
    pub result: bool,
}

impl StarCoverage {
    fn detect(lower: &str) -> Self {
        let any = |cues: &[&str]| cues.iter().any(|cue| lower.contains(cue));
        Self {
            situation: any(SITUATION_CUES),
            task: any(TASK_CUES),
            action: any(ACTION_CUES),
            result: any(RESULT_CUES),
        }
    }

    fn count(&self) -> u32 {
        [self.situation, self.task, self.action, self.result]
            .iter()
            .filter(|&&hit| hit)
            .count() as u32
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerFeedback {
    pub question_id: &'static str,
    pub score: u32,
    pub rating: AnswerRating,
    pub word_count: usize,
    pub star: StarCoverage,
    pub quantified: bool,
    pub ownership: bool,
    pub filler_count: usize,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn evaluate_answer(
    question: &HrQuestion,
    answer: &str,
) -> Result<AnswerFeedback, FeedbackError> {
    if answer.trim().is_empty() {
        return Err(FeedbackError::EmptyAnswer);
    }

    let lower = answer.to_lowercase();
    let words: Vec<String> = answer
        .split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect();
    let word_count = words.len();

    let mut strengths = Vec::new();
    let mut suggestions = Vec::new();

    let length_points = match word_count {
        80..=250 => {
            strengths.push("Answer length is in the ideal range".to_string());
            25
        }
        40..=79 => {
            suggestions.push(format!(
                "Expand your answer ({word_count} words); aim for 80–250 words"
            ));
            15
        }
        251..=350 => {
            suggestions.push(format!(
                "Tighten your answer ({word_count} words); aim for 80–250 words"
            ));
            15
        }
        _ if word_count < 40 => {
            suggestions.push(format!(
                "Your answer is very short ({word_count} words); add context and an example"
            ));
            5
        }
        _ => {
            suggestions.push(format!(
                "Your answer is too long ({word_count} words); keep it under 250 words"
            ));
            5
        }
    };

    let star = StarCoverage::detect(&lower);
    let raw_star = star.count() * 10;
    let star_points = if question.category == HrCategory::Behavioral {
        raw_star
    } else {
        (raw_star + 40) / 2
    };
    if star.count() == 4 {
        strengths.push("Covers situation, task, action and result".to_string());
    } else if question.category == HrCategory::Behavioral {
        let missing: Vec<&str> = [
            (star.situation, "situation"),
            (star.task, "task"),
            (star.action, "action"),
            (star.result, "result"),
        ]
        .iter()
        .filter(|(hit, _)| !hit)
        .map(|(_, name)| *name)
        .collect();
        suggestions.push(format!(
            "Structure the story with STAR; missing: {}",
            missing.join(", ")
        ));
    }

    let quantified = answer
        .chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '%' | '$' | '€' | '£'));
    if quantified {
        strengths.push("Includes a measurable outcome".to_string());
    } else {
        suggestions.push("Add a number: time saved, percentage, team size or money".to_string());
    }

    let ownership = words.iter().any(|w| OWNERSHIP_WORDS.contains(&w.as_str()));
    if ownership {
        strengths.push("Speaks to your own contribution".to_string());
    } else {
        suggestions.push("Say what you did personally, using \"I\"".to_string());
    }

    let filler_count = words
        .iter()
        .filter(|w| FILLER_WORDS.contains(&w.as_str()))
        .count()
        + FILLER_PHRASES
            .iter()
            .map(|p| lower.matches(p).count())
            .sum::<usize>();
    let filler_penalty = (filler_count as u32 * 2).min(10);
    if filler_count > 0 {
        suggestions.push(format!(
            "Cut filler words ({filler_count} found), pause instead"
        ));
    }

    let earned = length_points
        + star_points
        + if quantified { 20 } else { 0 }
        + if ownership { 15 } else { 0 };
    let score = earned.saturating_sub(filler_penalty).min(100);

    Ok(AnswerFeedback {
        question_id: question.id,
        score,
        rating: AnswerRating::from_score(score),
        word_count,
        star,
        quantified,
        ownership,
        filler_count,
        strengths,
        suggestions,
    })
}

fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hr::questions::find_question;

    const STAR_ANSWER: &str = "In my previous role at a fintech startup, we were two weeks from \
        launch when a teammate and I disagreed about the database schema. I was responsible for \
        the payments service, so I needed to unblock us quickly. I scheduled a short meeting, \
        I proposed we benchmark both designs, and I built a prototype of each over two days. \
        As a result we picked the faster schema, cut query latency by 35%, and shipped on time. \
        I learned to settle design debates with data instead of opinions.";

    fn behavioral() -> &'static HrQuestion {
        find_question("conflict-with-teammate").unwrap()
    }

    #[test]
    fn test_star_answer_is_excellent() {
        let fb = evaluate_answer(behavioral(), STAR_ANSWER).unwrap();
        assert_eq!(fb.star.count(), 4);
        assert!(fb.quantified);
        assert!(fb.ownership);
        assert_eq!(fb.filler_count, 0);
        assert!(fb.word_count >= 80, "word count {}", fb.word_count);
        assert_eq!(fb.score, 100);
        assert_eq!(fb.rating, AnswerRating::Excellent);
    }

    #[test]
    fn test_short_vague_answer_needs_work() {
        let fb = evaluate_answer(behavioral(), "I am a hard worker.").unwrap();
        assert_eq!(fb.score, 20);
        assert_eq!(fb.rating, AnswerRating::NeedsWork);
        assert!(fb.suggestions.iter().any(|s| s.contains("STAR")));
    }

    #[test]
    fn test_filler_words_penalized() {
        let fb = evaluate_answer(behavioral(), "Um, basically I, like, fixed it, you know.").unwrap();
        assert_eq!(fb.filler_count, 4);
        assert_eq!(fb.score, 12);
    }

    #[test]
    fn test_non_behavioral_gets_partial_star_credit() {
        let answer = "I am a hard worker.";
        let motivation = find_question("greatest-strength").unwrap();
        let b = evaluate_answer(behavioral(), answer).unwrap();
        let m = evaluate_answer(motivation, answer).unwrap();
        assert_eq!(m.score, b.score + 20);
        assert!(!m.suggestions.iter().any(|s| s.contains("STAR")));
    }

    #[test]
    fn test_blank_answer_rejected() {
        assert_eq!(
            evaluate_answer(behavioral(), "   ").unwrap_err(),
            FeedbackError::EmptyAnswer
        );
    }

    #[test]
    fn test_normalize_word_keeps_apostrophes() {
        assert_eq!(normalize_word("I'm,"), "i'm");
        assert_eq!(normalize_word("(Rust)"), "rust");
    }
}
