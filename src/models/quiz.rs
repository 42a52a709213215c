// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single multiple-choice question.
///
/// `id` is unique within its quiz (assigned 1..N at creation time), not
/// globally. `answer` is the canonical correct option, always one of
/// `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// A stored quiz: one JSON file per quiz, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// DTO for creating a new quiz. Question ids are assigned by the store.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200, message = "Quiz name must not be empty."))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, message = "A quiz needs at least one question."), nested)]
    pub questions: Vec<NewQuestion>,
}

/// One question entry of a create-quiz payload.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_answer_is_option))]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.is_empty() {
        return Err(validator::ValidationError::new("options_cannot_be_empty"));
    }
    for opt in options {
        if opt.is_empty() || opt.len() > 500 {
            return Err(validator::ValidationError::new("option_length_invalid"));
        }
    }
    Ok(())
}

fn validate_answer_is_option(q: &NewQuestion) -> Result<(), validator::ValidationError> {
    if !q.options.contains(&q.answer) {
        return Err(validator::ValidationError::new("answer_not_in_options"));
    }
    Ok(())
}
