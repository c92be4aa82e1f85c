// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fire-and-forget launch of a companion script so a web request can return before the task ends
// role: process/launcher
// inputs: LaunchSpec (interpreter, script, args); CGI QUERY_STRING for the binary
// outputs: pid of the spawned child
// side_effects: Spawns one child process
// invariants:
// - the child gets null stdio and (on Unix) its own process group
// - the parent never waits on or reads from the child
// - spawn_detached does not sanitize; callers run sanitize_arg first
// errors: anyhow with the command line as context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

pub const DEFAULT_INTERPRETER: &str = "/usr/bin/python3";
pub const DEFAULT_SCRIPT: &str = "backgroundTask.py";
pub const MAX_ARG_LEN: usize = 256;

#[derive(Debug, Clone)]
pub struct LaunchSpec {
  pub interpreter: PathBuf,
  pub script: PathBuf,
  pub args: Vec<String>,
}

impl LaunchSpec {
  fn command(&self) -> Command {
    let mut cmd = Command::new(&self.interpreter);
    cmd
      .arg(&self.script)
      .args(&self.args)
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null());

    #[cfg(unix)]
    {
      use std::os::unix::process::CommandExt;
      cmd.process_group(0);
    }

    cmd
  }
}

/// Start the script and return its pid without waiting for it.
pub fn spawn_detached(spec: &LaunchSpec) -> Result<u32> {
  let child = spec.command().spawn().with_context(|| {
    format!(
      "spawning {} {} ({} args)",
      spec.interpreter.display(),
      spec.script.display(),
      spec.args.len()
    )
  })?;
  let pid = child.id();
  info!(pid, script = %spec.script.display(), "launched background task");

  // Dropping the handle neither kills nor waits on the child.
  drop(child);

  Ok(pid)
}

/// Accept an argument only if it is short and made of shell-inert characters.
pub fn sanitize_arg(raw: &str) -> Option<String> {
  static SAFE_ARG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.,:@=+/-]+$").unwrap());

  let s = raw.trim();

  if s.is_empty() || s.len() > MAX_ARG_LEN || s.starts_with('-') || !SAFE_ARG.is_match(s) {
    return None;
  }

  Some(s.to_string())
}

/// Decoded values of a CGI query string, in order (`a=1&b=me%40x.com` gives `["1", "me@x.com"]`).
/// Keys and empty values are dropped.
pub fn query_values(query: &str) -> Vec<String> {
  url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
    .map(|(_, v)| v.into_owned())
    .filter(|v| !v.is_empty())
    .collect()
}
