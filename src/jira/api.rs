// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Trait seam over the tracker's HTTP surface plus the ureq-backed implementation
// role: jira/api
// inputs: base URL, Credentials
// outputs: HttpReply (status + raw body) per call
// side_effects: Network calls to the tracker (exactly the ones callers make; no retries)
// invariants:
// - non-success statuses are returned as replies, never as errors
// - errors only mean the exchange could not complete (DNS, connect, TLS, read)
// errors: anyhow with the failing URL as context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use tracing::debug;

use crate::credentials::Credentials;

pub const MYSELF_PATH: &str = "/rest/api/2/myself";
pub const SEARCH_PATH: &str = "/rest/api/2/search";

/// Raw outcome of one completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
  pub status: u16,
  pub body: String,
}

impl HttpReply {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

// --- Trait seam for the tracker API ---
pub trait JiraApi {
  fn get(&self, path: &str) -> Result<HttpReply>;
  fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<HttpReply>;
}

pub struct JiraHttpApi {
  base_url: String,
  auth: String,
  agent: ureq::Agent,
}

impl JiraHttpApi {
  pub fn new(base_url: &str, credentials: &Credentials) -> Self {
    let agent: ureq::Agent = ureq::Agent::config_builder()
      .http_status_as_error(false)
      .build()
      .into();

    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      auth: credentials.basic_auth(),
      agent,
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }
}

impl JiraApi for JiraHttpApi {
  fn get(&self, path: &str) -> Result<HttpReply> {
    let url = self.url(path);

    let mut resp = self
      .agent
      .get(&url)
      .header("Accept", "application/json")
      .header("User-Agent", "latest-jira-items")
      .header("Authorization", &self.auth)
      .call()
      .with_context(|| format!("GET {}", url))?;

    let status = resp.status().as_u16();
    let body = resp
      .body_mut()
      .read_to_string()
      .with_context(|| format!("reading body of GET {}", url))?;
    debug!(%url, status, bytes = body.len(), "tracker GET");

    Ok(HttpReply { status, body })
  }

  fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<HttpReply> {
    let url = self.url(path);

    let mut resp = self
      .agent
      .post(&url)
      .header("Accept", "application/json")
      .header("User-Agent", "latest-jira-items")
      .header("Authorization", &self.auth)
      .send_json(body)
      .with_context(|| format!("POST {}", url))?;

    let status = resp.status().as_u16();
    let text = resp
      .body_mut()
      .read_to_string()
      .with_context(|| format!("reading body of POST {}", url))?;
    debug!(%url, status, bytes = text.len(), "tracker POST");

    Ok(HttpReply { status, body: text })
  }
}
