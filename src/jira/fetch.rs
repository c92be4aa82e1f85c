// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve the current account, then run the one bounded search with changelog expansion
// role: jira/fetch
// inputs: &dyn JiraApi, JQL string
// outputs: Fetched { account_id, issues }
// side_effects: Exactly two sequential tracker calls on success; the search is skipped if identity fails
// invariants:
// - no retries; the first failure is returned
// - every failure is classified into a distinct ReportError variant
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing::{debug, info};

use crate::error::ReportError;
use crate::jira::api::{JiraApi, MYSELF_PATH, SEARCH_PATH};
use crate::jira::types::{Myself, RawIssue, SearchRequest, SearchResponse};

#[derive(Debug, Clone)]
pub struct Fetched {
  pub account_id: String,
  pub issues: Vec<RawIssue>,
}

/// Look up the account id of the authenticated user.
pub fn resolve_account_id(api: &dyn JiraApi) -> Result<String, ReportError> {
  let reply = api
    .get(MYSELF_PATH)
    .map_err(|e| ReportError::IdentityTransport(format!("{:#}", e)))?;

  let response_error = |reason: &str| ReportError::IdentityResponse {
    status: reply.status,
    reason: reason.to_string(),
    body: reply.body.clone(),
  };

  if !reply.is_success() {
    return Err(response_error("non-success status"));
  }
  if reply.body.trim().is_empty() {
    return Err(response_error("empty response body"));
  }

  let myself: Myself =
    serde_json::from_str(&reply.body).map_err(|e| response_error(&format!("invalid JSON ({})", e)))?;

  let account_id = myself
    .account_id()
    .map(str::to_string)
    .ok_or_else(|| ReportError::MissingAccountId { body: reply.body.clone() })?;

  info!(%account_id, "resolved current user");
  Ok(account_id)
}

/// Run the search for `jql`, returning at most one page of issues.
pub fn search_issues(api: &dyn JiraApi, jql: &str) -> Result<Vec<RawIssue>, ReportError> {
  let request = serde_json::to_value(SearchRequest::new(jql))
    .map_err(|e| ReportError::SearchTransport(format!("encoding search request: {}", e)))?;
  debug!(%jql, "searching");

  let reply = api
    .post_json(SEARCH_PATH, &request)
    .map_err(|e| ReportError::SearchTransport(format!("{:#}", e)))?;

  let response_error = |reason: &str| ReportError::SearchResponse {
    status: reply.status,
    reason: reason.to_string(),
    body: reply.body.clone(),
  };

  if !reply.is_success() {
    return Err(response_error("non-success status"));
  }
  if reply.body.trim().is_empty() {
    return Err(response_error("empty response body"));
  }

  let value: serde_json::Value =
    serde_json::from_str(&reply.body).map_err(|e| response_error(&format!("invalid JSON ({})", e)))?;

  if value.is_null() || value.as_object().is_some_and(|o| o.is_empty()) {
    return Err(response_error("no data"));
  }

  let parsed: SearchResponse =
    serde_json::from_value(value).map_err(|e| response_error(&format!("unexpected shape ({})", e)))?;

  info!(returned = parsed.issues.len(), total = ?parsed.total, "search complete");
  Ok(parsed.issues)
}

/// Identity lookup followed by the search; the search depends on the first call succeeding.
pub fn fetch_issues(api: &dyn JiraApi, jql: &str) -> Result<Fetched, ReportError> {
  let account_id = resolve_account_id(api)?;
  let issues = search_issues(api, jql)?;

  Ok(Fetched { account_id, issues })
}
