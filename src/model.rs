// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Domain model (issues, time entries, aggregated report) shared by aggregation and rendering
// role: model/types
// outputs: Serializable structs with stable field names for the --json report
// invariants:
// - Issue::time_entries is sorted by timestamp ascending with unique timestamps
// - Report::total_logged_seconds equals the sum of Issue::logged_seconds()
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyWindow {
  LastDays(u32),
  AllHistory,
}

impl RecencyWindow {
  /// Human label used in the report footer.
  pub fn describe(&self) -> String {
    match self {
      RecencyWindow::LastDays(1) => "updated in the last 1 day".to_string(),
      RecencyWindow::LastDays(days) => format!("updated in the last {} days", days),
      RecencyWindow::AllHistory => "all history".to_string(),
    }
  }
}

/// Time the current user logged against an issue at one change timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
  pub at: DateTime<FixedOffset>,
  pub seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
  pub key: String,
  pub issue_type: String,
  pub status: String,
  pub summary: String,
  pub url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_updated: Option<DateTime<FixedOffset>>,
  /// Total reported by the tracker across all users.
  pub time_spent_seconds: i64,
  pub time_entries: Vec<TimeEntry>,
}

impl Issue {
  /// Sum of the current user's entries on this issue.
  pub fn logged_seconds(&self) -> i64 {
    self.time_entries.iter().map(|e| e.seconds).fold(0i64, i64::saturating_add)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
  pub account_id: String,
  pub window: RecencyWindow,
  pub count: usize,
  pub total_logged_seconds: i64,
  pub issues: Vec<Issue>,
}
