// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fatal error type for the report pipeline with one process exit code per failure kind
// role: errors
// outputs: ReportError (Display is the operator-facing message), exit_code()
// invariants:
// - every variant maps to a distinct exit code; 0 and 64 are never used
// - response-bearing variants echo the raw response body
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
  #[error(
    "Must have a credential file here: {}\nFile must contain one line: email:token\nUse -h flag for more details",
    .path.display()
  )]
  MissingCredentialFile { path: PathBuf },

  #[error(
    "Tried to read first line from credential file '{}' which is empty. Cannot continue.",
    .path.display()
  )]
  EmptyCredentialFile { path: PathBuf },

  #[error("Could not read credential file '{}': {source}", .path.display())]
  UnreadableCredentialFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failure to make identity request to JIRA: {0}")]
  IdentityTransport(String),

  #[error("Failure to get identity data from JIRA: {reason}. Response ({status}):\n{body}")]
  IdentityResponse { status: u16, reason: String, body: String },

  #[error("JIRA identity response has no accountId. Response:\n{body}")]
  MissingAccountId { body: String },

  #[error("Failure to make search request to JIRA: {0}")]
  SearchTransport(String),

  #[error("Failure to get search data from JIRA: {reason}. Response ({status}):\n{body}")]
  SearchResponse { status: u16, reason: String, body: String },

  #[error("Failure writing report: {0}")]
  Output(#[from] std::io::Error),
}

impl ReportError {
  /// Process exit code for this failure.
  pub fn exit_code(&self) -> i32 {
    match self {
      ReportError::MissingCredentialFile { .. } => 1,
      ReportError::EmptyCredentialFile { .. } => 2,
      ReportError::IdentityTransport(_) => 3,
      ReportError::IdentityResponse { .. } => 4,
      ReportError::MissingAccountId { .. } => 5,
      ReportError::SearchTransport(_) => 6,
      ReportError::SearchResponse { .. } => 7,
      ReportError::UnreadableCredentialFile { .. } => 8,
      ReportError::Output(_) => 9,
    }
  }
}
