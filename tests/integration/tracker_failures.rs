use predicates::prelude::*;
use test_support::{StubResponse, StubServer};

fn run_against(base_url: &str) -> assert_cmd::assert::Assert {
  let td = test_support::tempdir();
  let creds = test_support::write_credentials(td.path(), "me@example.com:token\n");

  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd.args(["--base-url", base_url, "-C", creds.to_str().unwrap()]).assert()
}

#[test]
fn identity_rejected_exits_4_and_skips_search() {
  let server = StubServer::start(vec![(
    "GET /rest/api/2/myself",
    StubResponse::json(401, r#"{"errorMessages":["Unauthorized"]}"#),
  )]);

  run_against(&server.url())
    .code(4)
    .stdout(predicate::str::contains("Failure to get identity data").and(predicate::str::contains("Unauthorized")));

  assert_eq!(server.hits(), 1);
}

#[test]
fn identity_without_account_id_exits_5() {
  let server = StubServer::start(vec![(
    "GET /rest/api/2/myself",
    StubResponse::json(200, r#"{"displayName":"Me Myself"}"#),
  )]);

  run_against(&server.url()).code(5).stdout(predicate::str::contains("accountId"));
  assert_eq!(server.hits(), 1);
}

#[test]
fn unreachable_tracker_exits_3() {
  let port = {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
  };

  run_against(&format!("http://127.0.0.1:{}", port))
    .code(3)
    .stdout(predicate::str::contains("Failure to make identity request"));
}

#[test]
fn search_failure_exits_7_without_report() {
  let server = StubServer::start(vec![
    ("GET /rest/api/2/myself", StubResponse::json(200, r#"{"accountId":"me-123"}"#)),
    ("POST /rest/api/2/search", StubResponse::json(500, "upstream exploded")),
  ]);

  run_against(&server.url()).code(7).stdout(
    predicate::str::contains("upstream exploded")
      .and(predicate::str::contains("YOUR").not())
      .and(predicate::str::contains("Key:").not()),
  );
}

#[test]
fn malformed_search_body_exits_7() {
  let server = StubServer::start(vec![
    ("GET /rest/api/2/myself", StubResponse::json(200, r#"{"accountId":"me-123"}"#)),
    ("POST /rest/api/2/search", StubResponse::json(200, "<html>not json</html>")),
  ]);

  run_against(&server.url()).code(7);
}
