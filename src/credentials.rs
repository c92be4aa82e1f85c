// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Load the `email:token` credential line and build the Basic auth header value
// role: config/credentials
// inputs: credential file path (already home-expanded)
// outputs: Credentials
// side_effects: Reads one file
// invariants:
// - only the first line is used, trimmed
// - Debug output never contains the token
// errors: MissingCredentialFile (1), EmptyCredentialFile (2), UnreadableCredentialFile (8)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ReportError;

/// Default location of the credential file; `~` expands to the home directory.
pub const DEFAULT_CREDENTIAL_FILE: &str = "~/.config/pr_script/authorization_token.txt";

#[derive(Clone)]
pub struct Credentials {
  line: String,
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("email", &self.email())
      .field("token", &"<redacted>")
      .finish()
  }
}

impl Credentials {
  pub fn from_line(line: &str) -> Option<Self> {
    let line = line.trim();

    if line.is_empty() {
      None
    } else {
      Some(Self { line: line.to_string() })
    }
  }

  pub fn load(path: &Path) -> Result<Self, ReportError> {
    if !path.is_file() {
      return Err(ReportError::MissingCredentialFile { path: path.to_path_buf() });
    }

    let text = std::fs::read_to_string(path).map_err(|source| ReportError::UnreadableCredentialFile {
      path: path.to_path_buf(),
      source,
    })?;

    let first = text.lines().next().unwrap_or("");

    Self::from_line(first).ok_or_else(|| ReportError::EmptyCredentialFile { path: path.to_path_buf() })
  }

  /// The part before the first `:`, when there is one.
  pub fn email(&self) -> Option<&str> {
    self.line.split_once(':').map(|(email, _)| email)
  }

  /// Value for the `Authorization` header.
  pub fn basic_auth(&self) -> String {
    format!("Basic {}", STANDARD.encode(self.line.as_bytes()))
  }
}
