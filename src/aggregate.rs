// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Map raw search results into Issues and attribute time-tracking deltas to the current user
// role: aggregation
// inputs: Fetched (account id + raw issues), base URL, recency window
// outputs: Report with per-issue entries and the grand total
// invariants:
// - only history entries authored by the resolved account id contribute
// - delta = (to or 0) - (from or 0), saturating; zero and negative deltas still count toward totals
// - time entries are unique per timestamp (same-timestamp deltas are summed) and sorted ascending
// - total_logged_seconds == sum of Issue::logged_seconds()
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use tracing::warn;

use crate::jira::fetch::Fetched;
use crate::jira::types::{RawHistoryItem, RawIssue};
use crate::model::{Issue, RecencyWindow, Report, TimeEntry};

const UNKNOWN_TYPE: &str = "Unknown Issue Type";
const UNKNOWN_STATUS: &str = "-- Status Unknown --";

/// Parse tracker timestamps (`2024-01-15T10:30:00.000+0000`), falling back to RFC 3339.
pub fn parse_tracker_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
  DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
    .or_else(|_| DateTime::parse_from_rfc3339(raw))
    .ok()
}

fn seconds_value(raw: Option<&str>, issue_key: &str) -> i64 {
  let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
    return 0;
  };

  match s.parse::<i64>() {
    Ok(v) => v,
    Err(_) => {
      warn!(issue = issue_key, value = s, "non-numeric timespent value; using 0");
      0
    }
  }
}

/// Seconds added by one time-tracking history item.
pub fn item_delta(item: &RawHistoryItem, issue_key: &str) -> i64 {
  seconds_value(item.to.as_deref(), issue_key).saturating_sub(seconds_value(item.from.as_deref(), issue_key))
}

/// Build one Issue, keeping only history authored by `account_id`.
pub fn build_issue(raw: &RawIssue, account_id: &str, base_url: &str) -> Issue {
  let fields = &raw.fields;
  let mut entries: BTreeMap<DateTime<FixedOffset>, i64> = BTreeMap::new();

  for history in &raw.changelog.histories {
    if history.author_account_id() != Some(account_id) {
      continue;
    }

    let mut items = history.timespent_items().peekable();

    if items.peek().is_none() {
      continue;
    }

    let Some(at) = history.created.as_deref().and_then(parse_tracker_timestamp) else {
      warn!(issue = %raw.key, history = ?history.id, created = ?history.created, "skipping history entry with unparsable timestamp");
      continue;
    };

    for item in items {
      let slot = entries.entry(at).or_insert(0);
      *slot = slot.saturating_add(item_delta(item, &raw.key));
    }
  }

  let last_updated = fields.updated.as_deref().and_then(|s| {
    let parsed = parse_tracker_timestamp(s);
    if parsed.is_none() {
      warn!(issue = %raw.key, updated = s, "unparsable last-updated timestamp");
    }
    parsed
  });

  Issue {
    key: raw.key.clone(),
    issue_type: fields
      .issuetype
      .as_ref()
      .and_then(|t| t.name.clone())
      .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
    status: fields
      .status
      .as_ref()
      .and_then(|s| s.name.clone())
      .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
    summary: fields.summary.clone().unwrap_or_default(),
    url: format!("{}/browse/{}", base_url.trim_end_matches('/'), raw.key),
    last_updated,
    time_spent_seconds: fields.timespent.unwrap_or(0),
    time_entries: entries
      .into_iter()
      .map(|(at, seconds)| TimeEntry { at, seconds })
      .collect(),
  }
}

/// Aggregate every fetched issue into a Report, preserving the search order.
pub fn aggregate(fetched: &Fetched, base_url: &str, window: RecencyWindow) -> Report {
  let issues: Vec<Issue> = fetched
    .issues
    .iter()
    .map(|raw| build_issue(raw, &fetched.account_id, base_url))
    .collect();

  let total_logged_seconds = issues
    .iter()
    .map(Issue::logged_seconds)
    .fold(0i64, i64::saturating_add);

  Report {
    account_id: fetched.account_id.clone(),
    window,
    count: issues.len(),
    total_logged_seconds,
    issues,
  }
}
