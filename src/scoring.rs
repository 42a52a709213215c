// src/scoring.rs

use std::collections::HashMap;

use crate::models::quiz::{Question, Quiz};

/// The outcome of grading one submission against a quiz.
#[derive(Debug)]
pub struct ScoreOutcome {
    pub score: u32,
    /// Submitted entries, matched or not. Deliberately counts every
    /// submitted answer, including ids unknown to the quiz.
    pub total_questions: usize,
    /// The canonical questions the submitted ids matched, including
    /// their correct answers.
    pub questions: Vec<Question>,
}

/// Grades a submission. Comparison is exact and case-sensitive; ids not
/// present in the quiz are ignored for scoring. Deterministic for a
/// given (quiz, answers) pair.
pub fn score_submission(quiz: &Quiz, answers: &HashMap<u32, String>) -> ScoreOutcome {
    let by_id: HashMap<u32, &Question> = quiz.questions.iter().map(|q| (q.id, q)).collect();

    let mut score = 0;
    let mut questions = Vec::new();

    // Sorted so the reviewed-question list comes back in a stable order.
    let mut ids: Vec<u32> = answers.keys().copied().collect();
    ids.sort_unstable();

    for id in ids {
        if let Some(question) = by_id.get(&id) {
            if answers[&id] == question.answer {
                score += 1;
            }
            questions.push((*question).clone());
        }
    }

    ScoreOutcome {
        score,
        total_questions: answers.len(),
        questions,
    }
}
