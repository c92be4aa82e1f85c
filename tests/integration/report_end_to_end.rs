use predicates::prelude::*;
use test_support::{StubResponse, StubServer};

fn tracker() -> StubServer {
  StubServer::start(vec![
    ("GET /rest/api/2/myself", StubResponse::json(200, &test_support::read_fixture_text("myself.json"))),
    (
      "POST /rest/api/2/search",
      StubResponse::json(200, &test_support::read_fixture_text("search_two_authors.json")),
    ),
  ])
}

fn fixture_issue_count() -> usize {
  let fixture: serde_json::Value = test_support::read_fixture_json("search_two_authors.json");
  fixture["issues"].as_array().map(|a| a.len()).unwrap_or(0)
}

fn run(server: &StubServer, extra: &[&str]) -> assert_cmd::assert::Assert {
  let td = test_support::tempdir();
  let creds = test_support::write_credentials(td.path(), "me@example.com:token\n");

  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd
    .args(["--base-url", &server.url(), "-C", creds.to_str().unwrap()])
    .args(extra)
    .assert()
}

#[test]
fn text_report_attributes_only_my_time() {
  let server = tracker();
  let out = run(&server, &[]).success().get_output().stdout.clone();
  let text = String::from_utf8(out).unwrap();

  let expected_first_issue = format!(
    "Key: PL-101 (Bug)\n\
     URL: {}/browse/PL-101\n\
     Status: In Progress\n\
     Last Updated: 2024-01-16 09:15:30 -0700 (Tue)\n\
     Summary: Fix login redirect\n\
     Total Time Tracked: 02:00:00\n\
     Your Time Logged: 01:00:00\n\
     \t2024-01-15 10:00:00 (Mon): Time logged = 01:00:00\n\n",
    server.url()
  );
  assert!(text.starts_with(&format!("\n{}", expected_first_issue)), "got:\n{}", text);

  // the other author's hour never shows up as an entry
  assert!(!text.contains("2024-01-15 14:30:00"));

  assert!(text.contains("Key: PL-102 (Task)"));
  assert!(text.contains("Last Updated: 2024-01-14 16:00:00 +0000 (Sun)"));
  assert!(text.ends_with(&format!(
    "YOUR {} ITEMS (updated in the last 7 days)\nTOTAL TIME LOGGED BY YOU: 01:00:00\n",
    fixture_issue_count()
  )));
}

#[test]
fn hide_worklog_entries_drops_entry_lines_only() {
  let server = tracker();
  run(&server, &["-W"]).success().stdout(
    predicate::str::contains("Your Time Logged: 01:00:00")
      .and(predicate::str::contains("Time logged =").not())
      .and(predicate::str::contains("TOTAL TIME LOGGED BY YOU: 01:00:00")),
  );
}

#[test]
fn all_historic_footer() {
  let server = tracker();
  run(&server, &["-H"]).success().stdout(predicate::str::contains(format!("YOUR {} ITEMS (all history)", fixture_issue_count())));
}

#[test]
fn search_request_carries_query_and_auth() {
  let server = tracker();
  run(&server, &["-E", "-D", "3"]).success();

  let requests = server.requests();
  assert_eq!(requests.len(), 2);
  assert_eq!(requests[0].method, "GET");
  assert_eq!(requests[0].path, "/rest/api/2/myself");

  let search = &requests[1];
  assert_eq!(search.method, "POST");
  assert_eq!(search.path, "/rest/api/2/search");
  assert!(search.header("authorization").unwrap_or_default().starts_with("Basic "));

  let body = search.json_body().expect("search body is JSON");
  assert_eq!(
    body["jql"],
    "(assignee = currentUser() OR worklogAuthor = currentUser()) AND resolution = Unresolved \
     AND updated > -3d AND type NOT IN (improvement) ORDER BY updated DESC"
  );
  assert_eq!(body["maxResults"], 50);
  assert_eq!(body["expand"], serde_json::json!(["changelog"]));
}

#[test]
fn json_report() {
  let server = tracker();
  let out = run(&server, &["--json"]).success().get_output().stdout.clone();
  let v: serde_json::Value = serde_json::from_slice(&out).expect("stdout is JSON");

  assert_eq!(v["account_id"], "me-123");
  assert_eq!(v["count"], fixture_issue_count());
  assert_eq!(v["total_logged_seconds"], 3600);
  assert_eq!(v["issues"][0]["key"], "PL-101");
  assert_eq!(v["issues"][1]["time_spent_seconds"], 0);
}
