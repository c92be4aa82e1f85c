// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for home-relative paths, logging setup, and man page rendering
// role: utilities/helpers
// inputs: Various primitives; clap CommandFactory; RUST_LOG
// outputs: Expanded paths, man page text, a global tracing subscriber
// side_effects: init_tracing installs the global subscriber (first call wins)
// invariants:
// - expand_home only rewrites a leading `~` or `~/`
// - logs go to stderr; stdout is reserved for the report and fatal messages
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::PathBuf;

use clap::CommandFactory;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
  let home = dirs::home_dir();

  match (raw, home) {
    ("~", Some(h)) => h,
    (r, Some(h)) if r.starts_with("~/") => h.join(&r[2..]),
    (r, _) => PathBuf::from(r),
  }
}

/// Default filter directive for a `-v` count.
pub fn verbosity_filter(verbose: u8) -> &'static str {
  match verbose {
    0 => "warn",
    1 => "info",
    _ => "debug",
  }
}

/// Install the stderr `fmt` subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: u8) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
