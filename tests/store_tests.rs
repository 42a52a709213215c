// tests/store_tests.rs
//
// Component-level tests for the quiz store, the question selector, the
// scorer and the append-only logs, exercised directly without HTTP.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use quiz_backend::error::AppError;
use quiz_backend::logs::EventLogs;
use quiz_backend::models::quiz::{NewQuestion, Question, Quiz};
use quiz_backend::models::report::CheatReport;
use quiz_backend::models::submission::ResultRecord;
use quiz_backend::questions;
use quiz_backend::scoring;
use quiz_backend::store::QuizStore;

fn temp_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("quiz-store-test-{}", uuid::Uuid::new_v4()))
}

async fn temp_store() -> QuizStore {
    let store = QuizStore::new(temp_dir());
    store.ensure_dir().await.expect("Failed to create store dir");
    store
}

fn entry(question: &str, options: &[&str], answer: &str) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        answer: answer.to_string(),
    }
}

fn sample_quiz(num_questions: u32, is_active: bool) -> Quiz {
    let questions = (1..=num_questions)
        .map(|id| Question {
            id,
            question: format!("Question {}", id),
            options: vec!["A".to_string(), "B".to_string()],
            answer: "A".to_string(),
        })
        .collect();
    Quiz {
        id: "test-quiz".to_string(),
        name: "Test".to_string(),
        description: String::new(),
        questions,
        created_at: chrono::Utc::now(),
        is_active,
    }
}

#[tokio::test]
async fn create_then_load_round_trips() {
    let store = temp_store().await;

    let created = store
        .create(
            "Geo".to_string(),
            "Geography basics".to_string(),
            vec![
                entry("Capital of France?", &["London", "Paris"], "Paris"),
                entry("Largest ocean?", &["Atlantic", "Pacific"], "Pacific"),
            ],
        )
        .await
        .expect("create failed");

    assert!(created.is_active);
    assert_eq!(created.questions[0].id, 1);
    assert_eq!(created.questions[1].id, 2);

    let loaded = store.load(&created.id).await.expect("load failed");
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn load_unknown_id_is_not_found() {
    let store = temp_store().await;
    let err = store.load("missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn toggle_twice_restores_active_flag() {
    let store = temp_store().await;
    let quiz = store
        .create(
            "Geo".to_string(),
            String::new(),
            vec![entry("Capital of France?", &["London", "Paris"], "Paris")],
        )
        .await
        .unwrap();

    let once = store.toggle_active(&quiz.id).await.unwrap();
    assert!(!once.is_active);

    let twice = store.toggle_active(&quiz.id).await.unwrap();
    assert!(twice.is_active);
}

#[tokio::test]
async fn delete_then_load_is_not_found() {
    let store = temp_store().await;
    let quiz = store
        .create(
            "Geo".to_string(),
            String::new(),
            vec![entry("Capital of France?", &["London", "Paris"], "Paris")],
        )
        .await
        .unwrap();

    store.delete(&quiz.id).await.expect("delete failed");

    let err = store.load(&quiz.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = store.delete(&quiz.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn list_all_returns_newest_first() {
    let store = temp_store().await;

    let mut ids = Vec::new();
    for name in ["first", "second", "third"] {
        let quiz = store
            .create(
                name.to_string(),
                String::new(),
                vec![entry("Q?", &["A", "B"], "A")],
            )
            .await
            .unwrap();
        ids.push(quiz.id);
        // Keep creation timestamps strictly ordered
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].name, "third");
    assert_eq!(listed[1].name, "second");
    assert_eq!(listed[2].name, "first");
}

#[tokio::test]
async fn list_all_skips_corrupt_records() {
    let dir = temp_dir();
    let store = QuizStore::new(&dir);
    store.ensure_dir().await.unwrap();

    store
        .create(
            "Geo".to_string(),
            String::new(),
            vec![entry("Q?", &["A", "B"], "A")],
        )
        .await
        .unwrap();

    tokio::fs::write(dir.join("damaged.json"), b"{not json at all")
        .await
        .unwrap();

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Geo");
}

#[test]
fn selector_draws_bounded_distinct_subsets() {
    let big = sample_quiz(40, true);
    let selected = questions::select_from_quiz(&big).unwrap();
    assert_eq!(selected.len(), 30);
    let ids: HashSet<u32> = selected.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 30);

    // Small pools are served whole
    let small = sample_quiz(3, true);
    let selected = questions::select_from_quiz(&small).unwrap();
    assert_eq!(selected.len(), 3);

    let defaults = questions::select_default();
    assert_eq!(defaults.len(), 15);
    let ids: HashSet<u32> = defaults.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 15);
}

#[test]
fn selector_refuses_inactive_quiz() {
    for n in [1, 5, 40] {
        let quiz = sample_quiz(n, false);
        let err = questions::select_from_quiz(&quiz).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}

#[test]
fn scorer_ignores_unknown_ids_but_counts_them() {
    let quiz = Quiz {
        questions: vec![Question {
            id: 1,
            question: "Capital of France?".to_string(),
            options: vec!["London".to_string(), "Paris".to_string()],
            answer: "Paris".to_string(),
        }],
        ..sample_quiz(0, true)
    };

    let answers: HashMap<u32, String> =
        HashMap::from([(1, "Paris".to_string()), (99, "x".to_string())]);

    let outcome = scoring::score_submission(&quiz, &answers);
    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.total_questions, 2);
    assert_eq!(outcome.questions.len(), 1);
    assert_eq!(outcome.questions[0].id, 1);
}

#[test]
fn scorer_is_deterministic_and_case_sensitive() {
    let quiz = sample_quiz(5, true);
    let answers: HashMap<u32, String> = HashMap::from([
        (1, "A".to_string()),
        (2, "a".to_string()),
        (3, "B".to_string()),
    ]);

    let first = scoring::score_submission(&quiz, &answers);
    let second = scoring::score_submission(&quiz, &answers);

    // Only the exact match on question 1 scores
    assert_eq!(first.score, 1);
    assert_eq!(first.total_questions, 3);
    assert_eq!(first.score, second.score);
    assert_eq!(first.total_questions, second.total_questions);
}

#[tokio::test]
async fn logs_append_and_read_back() {
    let dir = temp_dir();
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let logs = EventLogs::new(dir.join("results.txt"), dir.join("cheating_reports.txt"));

    let report = CheatReport {
        name: "Bob".to_string(),
        roll_number: "7".to_string(),
        ip: "10.0.0.1".to_string(),
        cheat_method: "Window blur".to_string(),
        timestamp: "2024-01-01T10:00:00Z".to_string(),
    };
    logs.append_cheat(&report).await.unwrap();

    let cheats = logs.read_all_cheats().await.unwrap();
    assert_eq!(cheats, vec![report]);

    // An untouched log reads as empty
    let results = logs.read_all_results().await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn log_reads_skip_corrupt_lines_and_filter_by_quiz() {
    let dir = temp_dir();
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let logs = EventLogs::new(dir.join("results.txt"), dir.join("cheating_reports.txt"));

    let record = |quiz_id: &str| ResultRecord {
        name: "Alice".to_string(),
        roll_number: "42".to_string(),
        quiz_id: quiz_id.to_string(),
        quiz_name: "Geo".to_string(),
        score: 1,
        total_questions: 1,
        timestamp: chrono::Utc::now(),
        answers: HashMap::from([(1, "Paris".to_string())]),
    };

    logs.append_result(&record("quiz-a")).await.unwrap();
    logs.append_result(&record("quiz-b")).await.unwrap();

    // Simulate a torn write in the middle of the log
    tokio::fs::write(
        dir.join("results.txt"),
        format!(
            "{}\ngarbage-line\n{}\n",
            serde_json::to_string(&record("quiz-a")).unwrap(),
            serde_json::to_string(&record("quiz-b")).unwrap()
        ),
    )
    .await
    .unwrap();

    let all = logs.read_all_results().await.unwrap();
    assert_eq!(all.len(), 2);

    let filtered = logs.results_for_quiz("quiz-b").await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].quiz_id, "quiz-b");
}
