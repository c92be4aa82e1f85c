// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn the issue filter flags into one JQL filter-and-sort expression
// role: query/builder
// inputs: QueryOptions (include epics/improvements/resolved, recency window)
// outputs: JQL string
// invariants:
// - clauses appear in fixed order: user, resolution, recency, type exclusions, sort
// - AllHistory never emits an `updated` clause
// - output always ends with ORDER BY updated DESC
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::Serialize;

use crate::model::RecencyWindow;

/// Default recency window, in days, when neither `--last-days` nor `--all-historic` is given.
pub const DEFAULT_DAYS_HISTORIC: u32 = 7;

const CURRENT_USER_CLAUSE: &str = "(assignee = currentUser() OR worklogAuthor = currentUser())";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
  pub include_epics: bool,
  pub include_improvements: bool,
  pub include_resolved: bool,
  pub window: RecencyWindow,
}

impl Default for QueryOptions {
  fn default() -> Self {
    Self {
      include_epics: false,
      include_improvements: false,
      include_resolved: false,
      window: RecencyWindow::LastDays(DEFAULT_DAYS_HISTORIC),
    }
  }
}

impl QueryOptions {
  /// Issue types excluded by these options, in clause order.
  pub fn excluded_types(&self) -> Vec<&'static str> {
    let mut out = Vec::new();

    if !self.include_epics {
      out.push("epic");
    }
    if !self.include_improvements {
      out.push("improvement");
    }

    out
  }

  pub fn to_jql(&self) -> String {
    let mut jql = String::from(CURRENT_USER_CLAUSE);

    if !self.include_resolved {
      jql.push_str(" AND resolution = Unresolved");
    }

    if let RecencyWindow::LastDays(days) = self.window {
      jql.push_str(&format!(" AND updated > -{}d", days));
    }

    let excluded = self.excluded_types();

    if !excluded.is_empty() {
      jql.push_str(&format!(" AND type NOT IN ({})", excluded.join(", ")));
    }

    jql.push_str(" ORDER BY updated DESC");
    jql
  }
}
