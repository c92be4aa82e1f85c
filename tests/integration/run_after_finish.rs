use predicates::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

fn wait_for_contents(path: &Path, timeout: Duration) -> String {
  let start = Instant::now();
  loop {
    let text = std::fs::read_to_string(path).unwrap_or_default();
    if text.ends_with('\n') || start.elapsed() > timeout {
      return text;
    }
    std::thread::sleep(Duration::from_millis(25));
  }
}

#[cfg(unix)]
#[test]
fn responds_with_cgi_header_and_runs_script() {
  let td = test_support::tempdir();
  let marker = td.path().join("args.txt");
  let script = td.path().join("task.sh");
  std::fs::write(&script, format!("echo \"$@\" > {}\n", marker.display())).unwrap();

  let mut cmd = test_support::cmd_bin("run-after-finish");
  cmd
    .args(["--interpreter", "/bin/sh", "--script", script.to_str().unwrap()])
    .args(["--arg", "first", "--arg", "$(id)"])
    .env("QUERY_STRING", "job=nightly&who=me%40example.com")
    .assert()
    .success()
    .stdout(
      predicate::str::starts_with("Content-type: text/html\r\n\r\n")
        .and(predicate::str::contains("Background task started")),
    );

  // the unsafe value is dropped; query values are decoded and follow --arg values
  assert_eq!(
    wait_for_contents(&marker, Duration::from_secs(10)),
    "first nightly me@example.com\n"
  );
}

#[test]
fn missing_interpreter_still_sends_header() {
  let mut cmd = test_support::cmd_bin("run-after-finish");
  cmd
    .args(["--interpreter", "/definitely/not/an/interpreter", "--script", "task.py"])
    .assert()
    .code(1)
    .stdout(
      predicate::str::starts_with("Content-type: text/html\r\n\r\n")
        .and(predicate::str::contains("Could not start background task")),
    );
}
