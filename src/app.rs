// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Explicit entry points: build query, fetch, aggregate, render; all driven by EffectiveConfig
// role: processing/orchestrator
// inputs: EffectiveConfig, a JiraApi (injected for tests), an io::Write for the report
// outputs: Report (run) or a rendered report on the writer (execute)
// side_effects: execute reads the credential file and calls the tracker over HTTP
// invariants:
// - credentials are validated before any network call
// - nothing is rendered unless both tracker calls succeeded
// errors: ReportError, one exit code per failure kind
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use tracing::debug;

use crate::aggregate::aggregate;
use crate::cli::EffectiveConfig;
use crate::credentials::Credentials;
use crate::error::ReportError;
use crate::jira::api::{JiraApi, JiraHttpApi};
use crate::jira::fetch::fetch_issues;
use crate::model::Report;
use crate::render::write_report;

/// Query, fetch and aggregate against `api`. No rendering, no credential I/O.
pub fn run(cfg: &EffectiveConfig, api: &dyn JiraApi) -> Result<Report, ReportError> {
  let jql = cfg.query.to_jql();
  debug!(%jql, "built query");

  let fetched = fetch_issues(api, &jql)?;

  Ok(aggregate(&fetched, &cfg.base_url, cfg.query.window))
}

/// `run` followed by rendering to `out`.
pub fn run_and_render<W: Write>(cfg: &EffectiveConfig, api: &dyn JiraApi, out: &mut W) -> Result<Report, ReportError> {
  let report = run(cfg, api)?;
  write_report(out, &report, cfg.render_options())?;
  out.flush()?;

  Ok(report)
}

/// Full CLI flow: credentials, HTTP client, report.
pub fn execute<W: Write>(cfg: &EffectiveConfig, out: &mut W) -> Result<Report, ReportError> {
  if let Ok(json) = serde_json::to_string(cfg) {
    debug!(config = %json, "effective config");
  }

  let credentials = Credentials::load(&cfg.credential_file)?;
  debug!(?credentials, "loaded credentials");

  let api = JiraHttpApi::new(&cfg.base_url, &credentials);

  run_and_render(cfg, &api, out)
}
