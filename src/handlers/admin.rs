// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError, logs::EventLogs, models::quiz::CreateQuizRequest, store::QuizStore,
};

/// Lists every recorded submission result.
pub async fn list_results(State(logs): State<EventLogs>) -> Result<impl IntoResponse, AppError> {
    let results = logs.read_all_results().await?;
    Ok(Json(results))
}

/// Lists the recorded results for one quiz.
pub async fn quiz_results(
    State(logs): State<EventLogs>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let results = logs.results_for_quiz(&quiz_id).await?;
    Ok(Json(results))
}

/// Lists every recorded cheat report.
pub async fn list_cheats(State(logs): State<EventLogs>) -> Result<impl IntoResponse, AppError> {
    let cheats = logs.read_all_cheats().await?;
    Ok(Json(cheats))
}

/// Lists all stored quizzes, newest first.
pub async fn list_quizzes(State(store): State<QuizStore>) -> Result<impl IntoResponse, AppError> {
    let quizzes = store.list_all().await?;
    Ok(Json(quizzes))
}

/// Creates a new quiz from the supplied questions.
pub async fn create_quiz(
    State(store): State<QuizStore>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = store
        .create(payload.name, payload.description, payload.questions)
        .await?;

    tracing::info!("Created quiz '{}' ({})", quiz.name, quiz.id);

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Deletes a quiz by id.
pub async fn delete_quiz(
    State(store): State<QuizStore>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    store.delete(&quiz_id).await?;

    tracing::info!("Deleted quiz {}", quiz_id);

    Ok(Json(serde_json::json!({
        "message": "Quiz deleted successfully"
    })))
}

/// Flips a quiz's active flag and returns the updated quiz.
pub async fn toggle_quiz(
    State(store): State<QuizStore>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store.toggle_active(&quiz_id).await?;
    Ok(Json(quiz))
}
