// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for durable state: quiz files and the two logs.
    pub data_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = env::var("QUIZ_DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            port,
            rust_log,
        }
    }

    /// Directory holding one JSON file per quiz.
    pub fn quizzes_dir(&self) -> PathBuf {
        self.data_dir.join("quizzes")
    }

    /// Append-only result log.
    pub fn results_log(&self) -> PathBuf {
        self.data_dir.join("results.txt")
    }

    /// Append-only cheat-report log.
    pub fn cheats_log(&self) -> PathBuf {
        self.data_dir.join("cheating_reports.txt")
    }
}
