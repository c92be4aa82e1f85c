use predicates::prelude::*;

#[test]
fn gen_man_prints_troff() {
  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd
    .arg("--gen-man")
    .assert()
    .success()
    .stdout(predicate::str::contains(".TH").and(predicate::str::contains("latest-jira-items")));
}

#[test]
fn help_lists_filter_flags() {
  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd.arg("--help").assert().success().stdout(
    predicate::str::contains("--include-epics")
      .and(predicate::str::contains("--last-days"))
      .and(predicate::str::contains("--hide-worklog-entries")),
  );
}

#[test]
fn usage_errors_use_their_own_exit_code() {
  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd.arg("--no-such-flag").assert().code(64);

  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd.args(["--last-days", "soon"]).assert().code(64);
}
