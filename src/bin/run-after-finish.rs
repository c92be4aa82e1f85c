//! CGI-style endpoint: acknowledge the request immediately and leave the
//! companion script running in the background.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, warn};

use latest_jira_items::launcher::{self, DEFAULT_INTERPRETER, DEFAULT_SCRIPT, LaunchSpec};
use latest_jira_items::{USAGE_EXIT_CODE, util};

const CGI_HEADER: &str = "Content-type: text/html\r\n\r\n";

#[derive(Parser, Debug)]
#[command(
    name = "run-after-finish",
    version,
    about = "Start a companion script in the background and respond without waiting for it",
    long_about = None
)]
struct Cli {
  /// Interpreter used to run the script
  #[arg(long, env = "RUN_AFTER_FINISH_INTERPRETER", default_value = DEFAULT_INTERPRETER)]
  interpreter: PathBuf,

  /// Script to run; relative paths resolve against the working directory
  #[arg(long, env = "RUN_AFTER_FINISH_SCRIPT", default_value = DEFAULT_SCRIPT)]
  script: PathBuf,

  /// Extra argument for the script (repeatable); sanitized like query values
  #[arg(long = "arg")]
  args: Vec<String>,

  /// CGI query string; its values are appended after --arg values
  #[arg(long, env = "QUERY_STRING", default_value = "", hide = true)]
  query_string: String,
}

fn sanitized_args(cli: &Cli) -> Vec<String> {
  let raw = cli
    .args
    .iter()
    .cloned()
    .chain(launcher::query_values(&cli.query_string));

  let mut out = Vec::new();

  for value in raw {
    match launcher::sanitize_arg(&value) {
      Some(ok) => out.push(ok),
      None => warn!(value = %value.escape_debug(), "dropping unsafe argument"),
    }
  }

  out
}

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      let _ = e.print();
      std::process::exit(if e.use_stderr() { USAGE_EXIT_CODE } else { 0 });
    }
  };

  util::init_tracing(0);

  let stdout = std::io::stdout();
  let mut out = stdout.lock();

  // Without the header first, the web server turns any output into a 500.
  let _ = write!(out, "{}", CGI_HEADER);

  let script = if cli.script.is_absolute() {
    cli.script.clone()
  } else {
    std::env::current_dir().map(|d| d.join(&cli.script)).unwrap_or_else(|_| cli.script.clone())
  };

  let spec = LaunchSpec {
    interpreter: cli.interpreter.clone(),
    script,
    args: sanitized_args(&cli),
  };

  match launcher::spawn_detached(&spec) {
    Ok(pid) => {
      let _ = writeln!(out, "<p>Background task started (pid {}).</p>", pid);
      let _ = out.flush();
    }
    Err(e) => {
      error!(error = %format!("{:#}", e), "launch failed");
      let _ = writeln!(out, "<p>Could not start background task.</p>");
      let _ = out.flush();
      std::process::exit(1);
    }
  }
}
