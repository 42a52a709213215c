// src/logs.rs

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::AppError;
use crate::models::report::CheatReport;
use crate::models::submission::ResultRecord;

/// One append-only log: one JSON record per line.
///
/// No locking beyond the platform's append atomicity for a single
/// writer; readers tolerate torn or corrupt lines by skipping them.
#[derive(Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serializes one record and appends it as a single line, creating
    /// the log file on first write.
    pub async fn append<T: Serialize>(&self, record: &T) -> Result<(), AppError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        Ok(())
    }

    /// Reads every record in append order. A missing log reads as empty;
    /// lines that fail to parse are skipped.
    pub async fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, AppError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping unparseable log line in {:?}: {}", self.path, e);
                }
            }
        }
        Ok(records)
    }
}

/// The two durable logs of the service, owned as independent sequences.
#[derive(Clone)]
pub struct EventLogs {
    pub results: EventLog,
    pub cheats: EventLog,
}

impl EventLogs {
    pub fn new(results_path: impl Into<PathBuf>, cheats_path: impl Into<PathBuf>) -> Self {
        Self {
            results: EventLog::new(results_path),
            cheats: EventLog::new(cheats_path),
        }
    }

    pub async fn append_result(&self, record: &ResultRecord) -> Result<(), AppError> {
        self.results.append(record).await
    }

    pub async fn append_cheat(&self, report: &CheatReport) -> Result<(), AppError> {
        self.cheats.append(report).await
    }

    pub async fn read_all_results(&self) -> Result<Vec<ResultRecord>, AppError> {
        self.results.read_all().await
    }

    pub async fn read_all_cheats(&self) -> Result<Vec<CheatReport>, AppError> {
        self.cheats.read_all().await
    }

    /// The full result log filtered by exact quiz id.
    pub async fn results_for_quiz(&self, quiz_id: &str) -> Result<Vec<ResultRecord>, AppError> {
        let results = self.read_all_results().await?;
        Ok(results.into_iter().filter(|r| r.quiz_id == quiz_id).collect())
    }
}
