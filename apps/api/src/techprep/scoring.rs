//! Quiz scoring — difficulty-weighted grading of a submitted TechPrep quiz.
//!
//! Easy = 1 point, Medium = 2, Hard = 3. Unanswered questions and
//! out-of-range selections earn nothing. Per-topic breakdown counts
//! questions, not points.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::models::quiz::QuestionRow;
use crate::techprep::models::{
    AnswerSubmission, Grade, Question, QuestionFeedback, QuizResult, TopicScore,
};
use crate::techprep::QuizError;

/// Converts loaded question rows into quiz questions in submission order
/// (`ids`), so feedback lines up with what the user saw.
///
/// Ids with no row are skipped here and rejected by `score_quiz`. Every
/// question must belong to `topic`.
pub fn order_and_check_topic(
    mut rows: Vec<QuestionRow>,
    ids: &[Uuid],
    topic: &str,
) -> Result<Vec<Question>, QuizError> {
    let mut questions = Vec::with_capacity(rows.len());
    for id in ids {
        if let Some(pos) = rows.iter().position(|r| r.id == *id) {
            questions.push(Question::try_from(rows.swap_remove(pos))?);
        }
    }
    if let Some(stray) = questions.iter().find(|q| q.topic != topic) {
        return Err(QuizError::TopicMismatch {
            question: stray.id,
            actual: stray.topic.clone(),
            expected: topic.to_string(),
        });
    }
    Ok(questions)
}

/// Scores `answers` against the quiz `questions`.
///
/// Feedback follows the order of `questions`.
pub fn score_quiz(
    questions: &[Question],
    answers: &[AnswerSubmission],
) -> Result<QuizResult, QuizError> {
    let mut selected: HashMap<Uuid, Option<usize>> = HashMap::with_capacity(answers.len());
    for answer in answers {
        if !questions.iter().any(|q| q.id == answer.question_id) {
            return Err(QuizError::UnknownQuestion(answer.question_id));
        }
        if selected
            .insert(answer.question_id, answer.selected_option)
            .is_some()
        {
            return Err(QuizError::DuplicateAnswer(answer.question_id));
        }
    }

    let mut earned_points = 0;
    let mut possible_points = 0;
    let mut correct_count = 0;
    let mut unanswered = 0;
    let mut topics: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    let mut feedback = Vec::with_capacity(questions.len());

    for question in questions {
        let choice = selected.get(&question.id).copied().flatten();
        let correct = choice == Some(question.correct_option);
        let points = question.difficulty.points();

        possible_points += points;
        if choice.is_none() {
            unanswered += 1;
        }
        let topic = topics.entry(question.topic.as_str()).or_insert((0, 0));
        topic.1 += 1;
        if correct {
            earned_points += points;
            correct_count += 1;
            topic.0 += 1;
        }

        feedback.push(QuestionFeedback {
            question_id: question.id,
            selected_option: choice,
            correct_option: question.correct_option,
            correct,
            explanation: question.explanation.clone(),
        });
    }

    let score_percent = percent(earned_points as usize, possible_points as usize);
    let by_topic = topics
        .into_iter()
        .map(|(topic, (correct, total))| TopicScore {
            topic: topic.to_string(),
            correct,
            total,
            score_percent: percent(correct, total),
        })
        .collect();

    Ok(QuizResult {
        earned_points,
        possible_points,
        score_percent,
        correct_count,
        total_questions: questions.len(),
        unanswered,
        grade: Grade::from_percent(score_percent),
        by_topic,
        feedback,
    })
}

/// Percentage rounded to one decimal place; 0 when `whole` is 0.
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::techprep::models::Difficulty;
    use chrono::Utc;

    fn row(topic: &str) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            topic: topic.to_string(),
            difficulty: "medium".to_string(),
            prompt: "Which one?".to_string(),
            options: vec!["a".into(), "b".into()],
            correct_option: 1,
            explanation: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_questions_follow_submission_order() {
        let (a, b, c) = (row("sql"), row("sql"), row("sql"));
        let ids = vec![c.id, a.id, b.id];
        let questions = order_and_check_topic(vec![a, b, c], &ids, "sql").unwrap();
        let ordered: Vec<Uuid> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ordered, ids);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let a = row("sql");
        let ids = vec![Uuid::new_v4(), a.id];
        let questions = order_and_check_topic(vec![a], &ids, "sql").unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_question_from_other_topic_rejected() {
        let sql = row("sql");
        let os = row("os");
        let stray = os.id;
        let ids = vec![sql.id, os.id];
        match order_and_check_topic(vec![sql, os], &ids, "sql") {
            Err(QuizError::TopicMismatch {
                question,
                actual,
                expected,
            }) => {
                assert_eq!(question, stray);
                assert_eq!(actual, "os");
                assert_eq!(expected, "sql");
            }
            other => panic!("expected topic mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_answer_key_in_row_rejected() {
        let mut bad = row("sql");
        bad.correct_option = 5;
        let ids = vec![bad.id];
        assert!(matches!(
            order_and_check_topic(vec![bad], &ids, "sql"),
            Err(QuizError::InvalidAnswerKey(_))
        ));
    }

    fn question(topic: &str, difficulty: Difficulty, correct: usize) -> Question {
        Question {
            id: Uuid::new_v4(),
            topic: topic.to_string(),
            difficulty,
            prompt: "Which one?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option: correct,
            explanation: Some("Because.".to_string()),
        }
    }

    fn answer(q: &Question, selected: Option<usize>) -> AnswerSubmission {
        AnswerSubmission {
            question_id: q.id,
            selected_option: selected,
        }
    }

    #[test]
    fn test_all_correct_is_strong() {
        let qs = vec![
            question("rust", Difficulty::Easy, 0),
            question("rust", Difficulty::Hard, 2),
        ];
        let answers = vec![answer(&qs[0], Some(0)), answer(&qs[1], Some(2))];
        let r = score_quiz(&qs, &answers).unwrap();
        assert_eq!(r.earned_points, 4);
        assert_eq!(r.possible_points, 4);
        assert!((r.score_percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(r.grade, Grade::Strong);
        assert_eq!(r.correct_count, 2);
    }

    #[test]
    fn test_difficulty_weighting() {
        // Easy right (1), hard wrong (0 of 3) → 1/4 = 25%
        let qs = vec![
            question("sql", Difficulty::Easy, 1),
            question("sql", Difficulty::Hard, 3),
        ];
        let answers = vec![answer(&qs[0], Some(1)), answer(&qs[1], Some(0))];
        let r = score_quiz(&qs, &answers).unwrap();
        assert!((r.score_percent - 25.0).abs() < f64::EPSILON);
        assert_eq!(r.grade, Grade::NeedsWork);
        // Topic breakdown counts questions: 1 of 2
        assert!((r.by_topic[0].score_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unanswered_counted_as_incorrect() {
        let qs = vec![
            question("os", Difficulty::Medium, 0),
            question("os", Difficulty::Medium, 1),
        ];
        let answers = vec![answer(&qs[0], Some(0)), answer(&qs[1], None)];
        let r = score_quiz(&qs, &answers).unwrap();
        assert_eq!(r.unanswered, 1);
        assert_eq!(r.correct_count, 1);
        assert_eq!(r.grade, Grade::Moderate);
        assert!(!r.feedback[1].correct);
    }

    #[test]
    fn test_missing_answer_entry_is_unanswered() {
        let qs = vec![question("os", Difficulty::Easy, 0)];
        let r = score_quiz(&qs, &[]).unwrap();
        assert_eq!(r.unanswered, 1);
        assert_eq!(r.score_percent, 0.0);
    }

    #[test]
    fn test_out_of_range_option_is_incorrect() {
        let qs = vec![question("net", Difficulty::Easy, 0)];
        let r = score_quiz(&qs, &[answer(&qs[0], Some(9))]).unwrap();
        assert_eq!(r.correct_count, 0);
        assert_eq!(r.unanswered, 0);
    }

    #[test]
    fn test_unknown_question_rejected() {
        let qs = vec![question("net", Difficulty::Easy, 0)];
        let stray = question("net", Difficulty::Easy, 0);
        let err = score_quiz(&qs, &[answer(&stray, Some(0))]).unwrap_err();
        assert!(matches!(err, QuizError::UnknownQuestion(id) if id == stray.id));
    }

    #[test]
    fn test_duplicate_answer_rejected() {
        let qs = vec![question("net", Difficulty::Easy, 0)];
        let answers = vec![answer(&qs[0], Some(0)), answer(&qs[0], Some(1))];
        assert!(matches!(
            score_quiz(&qs, &answers),
            Err(QuizError::DuplicateAnswer(_))
        ));
    }

    #[test]
    fn test_topic_breakdown_sorted_by_name() {
        let qs = vec![
            question("sql", Difficulty::Easy, 0),
            question("algorithms", Difficulty::Easy, 0),
        ];
        let answers = vec![answer(&qs[0], Some(0)), answer(&qs[1], Some(0))];
        let r = score_quiz(&qs, &answers).unwrap();
        let names: Vec<_> = r.by_topic.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(names, vec!["algorithms", "sql"]);
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        let r = score_quiz(&[], &[]).unwrap();
        assert_eq!(r.score_percent, 0.0);
        assert_eq!(r.total_questions, 0);
    }

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        assert!((percent(1, 3) - 33.3).abs() < 1e-9);
        assert!((percent(2, 3) - 66.7).abs() < 1e-9);
    }
}
