use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::quiz::QuizAttemptRow;

/// Minimum change in mean score (points) that counts as a trend.
const TREND_THRESHOLD: f64 = 5.0;
const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Steady,
    Declining,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicProgress {
    pub topic: String,
    pub attempts: usize,
    pub best_score: f64,
    pub latest_score: f64,
    pub average_score: f64,
    pub trend: Trend,
    pub status: TopicStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub total_attempts: usize,
    pub overall_average: f64,
    pub topics: Vec<TopicProgress>,
    pub active_day_streak: u32,
    pub weakest_topic: Option<String>,
    pub recommendations: Vec<String>,
}

pub fn compute_progress_report(attempts: &[QuizAttemptRow], today: NaiveDate) -> ProgressReport {
    let mut by_topic: BTreeMap<&str, Vec<&QuizAttemptRow>> = BTreeMap::new();
    for attempt in attempts {
        by_topic.entry(attempt.topic.as_str()).or_default().push(attempt);
    }

    let mut topics = Vec::with_capacity(by_topic.len());
    let mut recommendations = Vec::new();

    for (topic, mut rows) in by_topic {
        rows.sort_by_key(|r| r.created_at);
        let scores: Vec<f64> = rows.iter().map(|r| r.score_percent).collect();

        let average_score = round1(mean(&scores));
        let best_score = scores.iter().copied().fold(0.0, f64::max);
        let latest_score = scores.last().copied().unwrap_or(0.0);
        let trend = compute_trend(&scores);
        let status = match average_score {
            s if s >= 80.0 => TopicStatus::Strong,
            s if s >= 50.0 => TopicStatus::Moderate,
            _ => TopicStatus::Weak,
        };

        if status == TopicStatus::Weak {
            recommendations.push(format!(
                "Revisit {topic}: average {average_score}% across {} attempts",
                scores.len()
            ));
        }
        if trend == Trend::Declining {
            recommendations.push(format!(
                "Your {topic} scores are slipping; retake a quiz to refresh the basics"
            ));
        }

        topics.push(TopicProgress {
            topic: topic.to_string(),
            attempts: scores.len(),
            best_score,
            latest_score,
            average_score,
            trend,
            status,
        });
    }

    if attempts.is_empty() {
        recommendations.push("Take your first TechPrep quiz to start tracking progress".to_string());
    }

    let weakest_topic = topics
        .iter()
        .min_by(|a, b| a.average_score.total_cmp(&b.average_score))
        .map(|t| t.topic.clone());

    let all_scores: Vec<f64> = attempts.iter().map(|a| a.score_percent).collect();

    ProgressReport {
        total_attempts: attempts.len(),
        overall_average: round1(mean(&all_scores)),
        topics,
        active_day_streak: active_day_streak(attempts, today),
        weakest_topic,
        recommendations,
    }
}

/// Mean of the last three scores against the mean of up to three before them.
fn compute_trend(scores: &[f64]) -> Trend {
    if scores.len() <= TREND_WINDOW {
        return Trend::Steady;
    }
    let split = scores.len() - TREND_WINDOW;
    let recent = mean(&scores[split..]);
    let prior = mean(&scores[split.saturating_sub(TREND_WINDOW)..split]);
    match recent - prior {
        d if d > TREND_THRESHOLD => Trend::Improving,
        d if d < -TREND_THRESHOLD => Trend::Declining,
        _ => Trend::Steady,
    }
}

/// Consecutive days with an attempt, ending today or yesterday.
fn active_day_streak(attempts: &[QuizAttemptRow], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = attempts.iter().map(|a| a.created_at.date_naive()).collect();

    let mut day = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
