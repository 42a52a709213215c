// src/models/report.rs

use serde::{Deserialize, Serialize};

/// One line of the append-only cheat log.
///
/// The timestamp is client-supplied (the browser observes the incident),
/// so it is kept as an opaque string rather than parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheatReport {
    pub name: String,
    pub roll_number: String,
    #[serde(default = "unknown_ip")]
    pub ip: String,
    pub cheat_method: String,
    pub timestamp: String,
}

fn unknown_ip() -> String {
    "Unknown".to_string()
}
