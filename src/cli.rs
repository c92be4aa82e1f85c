use clap::{ArgAction, Parser};
use serde::Serialize;
use std::path::PathBuf;

use crate::credentials::DEFAULT_CREDENTIAL_FILE;
use crate::model::RecencyWindow;
use crate::query::{DEFAULT_DAYS_HISTORIC, QueryOptions};
use crate::render::RenderOptions;
use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "latest-jira-items",
    version,
    about = "Get 'my' JIRA items that have had activity on them recently, with the time I logged",
    long_about = None
)]
pub struct Cli {
  /// Location of your credential file, one line: <email>:<API token>
  /// (create a token at https://id.atlassian.com/manage-profile/security/api-tokens)
  #[arg(long, short = 'C')]
  pub credential_file: Option<String>,

  /// Include Epics; without this, Epics are not shown
  #[arg(long, short = 'E')]
  pub include_epics: bool,

  /// Include Improvements; without this, Improvement-type items are not shown
  #[arg(long, short = 'I')]
  pub include_improvements: bool,

  /// Include items that HAVE been resolved (usually Done or Rejected)
  #[arg(long, short = 'R', alias = "include-resolved-items")]
  pub include_resolved: bool,

  /// Include ALL items, not just the recently updated ones
  #[arg(long, short = 'H')]
  pub all_historic: bool,

  /// How many days of modified items to include (default 7)
  #[arg(long, short = 'D')]
  pub last_days: Option<u32>,

  /// Do not print the individual time entries under each item
  #[arg(long, short = 'W')]
  pub hide_worklog_entries: bool,

  /// Atlassian Cloud subdomain: <site>.atlassian.net
  #[arg(long, env = "JIRA_SITE", default_value = "playerlync")]
  pub site: String,

  /// Full tracker base URL; overrides --site
  #[arg(long, env = "JIRA_BASE_URL", hide = true)]
  pub base_url: Option<String>,

  /// Print the report as JSON
  #[arg(long)]
  pub json: bool,

  /// More log output on stderr (-v info, -vv debug); RUST_LOG wins when set
  #[arg(long, short = 'v', action = ArgAction::Count)]
  pub verbose: u8,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug, Serialize)]
pub struct EffectiveConfig {
  pub credential_file: PathBuf,
  pub base_url: String,
  pub query: QueryOptions,
  pub show_worklog: bool,
  pub json: bool,
  pub verbose: u8,
}

impl EffectiveConfig {
  pub fn render_options(&self) -> RenderOptions {
    RenderOptions {
      show_worklog: self.show_worklog,
      json: self.json,
    }
  }
}

pub fn normalize(cli: Cli) -> EffectiveConfig {
  // all-historic wins over any --last-days value
  let window = if cli.all_historic {
    RecencyWindow::AllHistory
  } else {
    RecencyWindow::LastDays(cli.last_days.unwrap_or(DEFAULT_DAYS_HISTORIC))
  };

  let base_url = match cli.base_url.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
    Some(url) => url.trim_end_matches('/').to_string(),
    None => format!("https://{}.atlassian.net", cli.site.trim()),
  };

  let credential_file = util::expand_home(cli.credential_file.as_deref().unwrap_or(DEFAULT_CREDENTIAL_FILE));

  EffectiveConfig {
    credential_file,
    base_url,
    query: QueryOptions {
      include_epics: cli.include_epics,
      include_improvements: cli.include_improvements,
      include_resolved: cli.include_resolved,
      window,
    },
    show_worklog: !cli.hide_worklog_entries,
    json: cli.json,
    verbose: cli.verbose,
  }
}
