// src/routes.rs

use axum::{
    Json, Router,
    routing::{delete, get, patch, post},
};
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

use crate::{
    handlers::{admin, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Taker-facing routes at the root, admin routes nested under /admin.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store, logs, config).
pub fn create_router(state: AppState) -> Router {
    // The dashboard and the quiz page are served from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let taker_routes = Router::new()
        .route("/questions", get(quiz::get_questions))
        .route("/questions/{quiz_id}", get(quiz::get_quiz_questions))
        .route("/submit", post(quiz::submit_quiz))
        .route("/report-cheat", post(quiz::report_cheat));

    let admin_routes = Router::new()
        .route("/results", get(admin::list_results))
        .route("/results/{quiz_id}", get(admin::quiz_results))
        .route("/cheats", get(admin::list_cheats))
        .route("/quizzes", get(admin::list_quizzes).post(admin::create_quiz))
        .route("/quizzes/{quiz_id}", delete(admin::delete_quiz))
        .route("/quizzes/{quiz_id}/toggle", patch(admin::toggle_quiz));

    Router::new()
        .route("/", get(root))
        .merge(taker_routes)
        .nest("/admin", admin_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness probe.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Quiz API is running" }))
}
