// src/store.rs

use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::Utc;
use tokio::fs;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::quiz::{NewQuestion, Question, Quiz};

/// Flat-file quiz store: one JSON file per quiz at `<dir>/<id>.json`.
///
/// Every write replaces the whole record and every read hits the
/// filesystem, so there is no cache and no stale-data window. Concurrent
/// writers to the same id race with last-write-wins.
#[derive(Clone)]
pub struct QuizStore {
    dir: PathBuf,
}

impl QuizStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the storage directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Creates and persists a new quiz.
    ///
    /// Assigns a fresh UUID, numbers the questions 1..N, stamps the
    /// creation time and marks the quiz active.
    pub async fn create(
        &self,
        name: String,
        description: String,
        entries: Vec<NewQuestion>,
    ) -> Result<Quiz, AppError> {
        let questions = entries
            .into_iter()
            .enumerate()
            .map(|(i, q)| Question {
                id: i as u32 + 1,
                question: q.question,
                options: q.options,
                answer: q.answer,
            })
            .collect();

        let quiz = Quiz {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            questions,
            created_at: Utc::now(),
            is_active: true,
        };

        self.save(&quiz).await?;
        Ok(quiz)
    }

    /// Loads a quiz by id. `NotFound` if no record exists.
    pub async fn load(&self, id: &str) -> Result<Quiz, AppError> {
        let bytes = fs::read(self.path_for(id)).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::NotFound("Quiz not found".to_string())
            } else {
                AppError::InternalServerError(e.to_string())
            }
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Overwrites the persisted record for `quiz.id` in full.
    pub async fn save(&self, quiz: &Quiz) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(quiz)?;
        fs::write(self.path_for(&quiz.id), json).await?;
        Ok(())
    }

    /// Returns every stored quiz, newest first.
    ///
    /// Files that fail to parse are skipped so one damaged record cannot
    /// take the admin dashboard down with it.
    pub async fn list_all(&self) -> Result<Vec<Quiz>, AppError> {
        let mut quizzes = Vec::new();

        let mut dir = match fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(quizzes),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match fs::read(&path).await {
                Ok(bytes) => match serde_json::from_slice::<Quiz>(&bytes) {
                    Ok(quiz) => quizzes.push(quiz),
                    Err(e) => {
                        tracing::warn!("Skipping unparseable quiz file {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Skipping unreadable quiz file {:?}: {}", path, e);
                }
            }
        }

        quizzes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(quizzes)
    }

    /// Removes the persisted record. `NotFound` if absent.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        fs::remove_file(self.path_for(id)).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::NotFound("Quiz not found".to_string())
            } else {
                AppError::InternalServerError(e.to_string())
            }
        })
    }

    /// Flips the active flag and persists the result.
    pub async fn toggle_active(&self, id: &str) -> Result<Quiz, AppError> {
        let mut quiz = self.load(id).await?;
        quiz.is_active = !quiz.is_active;
        self.save(&quiz).await?;
        Ok(quiz)
    }
}
