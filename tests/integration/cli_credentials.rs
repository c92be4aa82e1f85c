use predicates::prelude::*;
use test_support::{StubResponse, StubServer};

fn stub() -> StubServer {
  StubServer::start(vec![
    ("GET /rest/api/2/myself", StubResponse::json(200, r#"{"accountId":"me-123"}"#)),
    ("POST /rest/api/2/search", StubResponse::json(200, r#"{"issues":[]}"#)),
  ])
}

#[test]
fn missing_credential_file_exits_1() {
  let server = stub();
  let td = test_support::tempdir();
  let path = td.path().join("nope.txt");

  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd
    .args(["--base-url", &server.url(), "-C", path.to_str().unwrap()])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Must have a credential file here"));

  assert_eq!(server.hits(), 0);
}

#[test]
fn empty_credential_file_exits_2_without_network() {
  let server = stub();
  let td = test_support::tempdir();
  let path = test_support::write_credentials(td.path(), "\nme@example.com:token\n");

  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd
    .args(["--base-url", &server.url(), "--credential-file", path.to_str().unwrap()])
    .assert()
    .code(2)
    .stdout(predicate::str::contains("which is empty"));

  assert_eq!(server.hits(), 0);
}

#[test]
fn credential_line_becomes_basic_auth() {
  let server = stub();
  let td = test_support::tempdir();
  let path = test_support::write_credentials(td.path(), "me@example.com:token\n");

  let mut cmd = test_support::cmd_bin("latest-jira-items");
  cmd
    .args(["--base-url", &server.url(), "-C", path.to_str().unwrap()])
    .assert()
    .success();

  let requests = server.requests();
  assert_eq!(requests.len(), 2);
  // base64("me@example.com:token")
  assert_eq!(
    requests[0].header("authorization"),
    Some("Basic bWVAZXhhbXBsZS5jb206dG9rZW4=")
  );
}
