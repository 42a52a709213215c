// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::AppError,
    logs::EventLogs,
    models::{
        report::CheatReport,
        submission::{QuizResult, QuizSubmission, ResultRecord},
    },
    questions, scoring,
    store::QuizStore,
};

/// Serves up to 15 random questions from the built-in pool.
pub async fn get_questions() -> Result<impl IntoResponse, AppError> {
    Ok(Json(questions::select_default()))
}

/// Serves up to 30 random questions from a stored quiz.
///
/// 404 for an unknown quiz id, 400 if the quiz is inactive.
pub async fn get_quiz_questions(
    State(store): State<QuizStore>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store.load(&quiz_id).await?;
    let selected = questions::select_from_quiz(&quiz)?;
    Ok(Json(selected))
}

/// Grades a submission against its quiz, appends a result record and
/// returns the outcome with the matched questions' canonical answers.
pub async fn submit_quiz(
    State(store): State<QuizStore>,
    State(logs): State<EventLogs>,
    Json(submission): Json<QuizSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store.load(&submission.quiz_id).await?;

    let outcome = scoring::score_submission(&quiz, &submission.answers);

    let record = ResultRecord {
        name: submission.name.clone(),
        roll_number: submission.roll_number.clone(),
        quiz_id: submission.quiz_id.clone(),
        quiz_name: quiz.name.clone(),
        score: outcome.score,
        total_questions: outcome.total_questions,
        timestamp: Utc::now(),
        answers: submission.answers.clone(),
    };
    logs.append_result(&record).await?;

    tracing::info!(
        "Submission from '{}' for quiz '{}': {}/{}",
        submission.name,
        quiz.name,
        outcome.score,
        outcome.total_questions
    );

    Ok(Json(QuizResult {
        name: submission.name,
        roll_number: submission.roll_number,
        score: outcome.score,
        total_questions: outcome.total_questions,
        questions: outcome.questions,
        user_answers: submission.answers,
    }))
}

/// Records a cheating incident reported by the client.
pub async fn report_cheat(
    State(logs): State<EventLogs>,
    Json(report): Json<CheatReport>,
) -> Result<impl IntoResponse, AppError> {
    logs.append_cheat(&report).await?;

    tracing::info!(
        "Cheat report for '{}' ({}): {}",
        report.name,
        report.roll_number,
        report.cheat_method
    );

    Ok(Json(serde_json::json!({
        "message": "Cheat report recorded successfully"
    })))
}
