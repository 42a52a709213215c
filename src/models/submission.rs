// src/models/submission.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::quiz::Question;

/// DTO for submitting quiz answers.
///
/// Answer keys are question ids within the target quiz; values are the
/// option strings the taker picked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub name: String,
    pub roll_number: String,
    pub quiz_id: String,
    pub answers: HashMap<u32, String>,
}

/// DTO returned from a submission. Includes the matched questions with
/// their canonical answers so the taker can review mistakes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub name: String,
    pub roll_number: String,
    pub score: u32,
    pub total_questions: usize,
    pub questions: Vec<Question>,
    pub user_answers: HashMap<u32, String>,
}

/// One line of the append-only result log. Never mutated or deleted;
/// stays valid even if the quiz it references is later removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub name: String,
    pub roll_number: String,
    pub quiz_id: String,
    pub quiz_name: String,
    pub score: u32,
    pub total_questions: usize,
    pub timestamp: DateTime<Utc>,
    pub answers: HashMap<u32, String>,
}
