// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render an aggregated Report as operator-facing text or pretty JSON
// role: output/render
// inputs: Report, RenderOptions
// outputs: Text written to any io::Write
// invariants:
// - timestamps print in their original offset
// - worklog lines print only for strictly positive deltas; totals include every delta
// - count/window line and grand total come after all issue blocks
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use chrono::{DateTime, FixedOffset};

use crate::duration::format_hms;
use crate::model::{Issue, Report, TimeEntry};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
  pub show_worklog: bool,
  pub json: bool,
}

pub fn format_last_updated(dt: &DateTime<FixedOffset>) -> String {
  dt.format("%Y-%m-%d %H:%M:%S %z (%a)").to_string()
}

pub fn format_entry_timestamp(dt: &DateTime<FixedOffset>) -> String {
  dt.format("%Y-%m-%d %H:%M:%S (%a)").to_string()
}

/// Entries shown under an issue. Zero and negative deltas are hidden here
/// but still counted in every total.
pub fn visible_entries(issue: &Issue) -> impl Iterator<Item = &TimeEntry> {
  issue.time_entries.iter().filter(|e| e.seconds > 0)
}

pub fn write_issue<W: Write>(out: &mut W, issue: &Issue, show_worklog: bool) -> std::io::Result<()> {
  let updated = issue
    .last_updated
    .as_ref()
    .map(format_last_updated)
    .unwrap_or_else(|| "-- Unknown --".to_string());

  writeln!(out, "Key: {} ({})", issue.key, issue.issue_type)?;
  writeln!(out, "URL: {}", issue.url)?;
  writeln!(out, "Status: {}", issue.status)?;
  writeln!(out, "Last Updated: {}", updated)?;
  writeln!(out, "Summary: {}", issue.summary)?;
  writeln!(out, "Total Time Tracked: {}", format_hms(issue.time_spent_seconds))?;
  writeln!(out, "Your Time Logged: {}", format_hms(issue.logged_seconds()))?;

  if show_worklog {
    for entry in visible_entries(issue) {
      writeln!(
        out,
        "\t{}: Time logged = {}",
        format_entry_timestamp(&entry.at),
        format_hms(entry.seconds)
      )?;
    }
  }

  writeln!(out)
}

pub fn write_text<W: Write>(out: &mut W, report: &Report, show_worklog: bool) -> std::io::Result<()> {
  writeln!(out)?;

  for issue in &report.issues {
    write_issue(out, issue, show_worklog)?;
  }

  writeln!(out, "YOUR {} ITEMS ({})", report.count, report.window.describe())?;
  writeln!(out, "TOTAL TIME LOGGED BY YOU: {}", format_hms(report.total_logged_seconds))?;

  Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
  serde_json::to_writer_pretty(&mut *out, report)?;
  writeln!(out)
}

pub fn write_report<W: Write>(out: &mut W, report: &Report, opts: RenderOptions) -> std::io::Result<()> {
  if opts.json {
    write_json(out, report)
  } else {
    write_text(out, report, opts.show_worklog)
  }
}
