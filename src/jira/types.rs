//! Wire shapes for the tracker's identity and search endpoints.
//!
//! Every field the report reads is defaulted here, so the rest of the crate
//! never deals with partially populated payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound on issues requested in the single search page.
pub const MAX_RESULTS: u32 = 50;

pub const SEARCH_FIELDS: [&str; 5] = ["summary", "timespent", "updated", "status", "issuetype"];

/// History item field name for time tracking changes.
pub const TIMESPENT_FIELD: &str = "timespent";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
  pub jql: String,
  pub fields: Vec<String>,
  pub expand: Vec<String>,
  pub max_results: u32,
}

impl SearchRequest {
  pub fn new(jql: &str) -> Self {
    Self {
      jql: jql.to_string(),
      fields: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
      expand: vec!["changelog".to_string()],
      max_results: MAX_RESULTS,
    }
  }
}

/// Body of the "current user" lookup; only the account id matters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Myself {
  #[serde(default)]
  pub account_id: Option<String>,
}

impl Myself {
  /// The account id, treating blank text as missing.
  pub fn account_id(&self) -> Option<&str> {
    self.account_id.as_deref().map(str::trim).filter(|s| !s.is_empty())
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
  #[serde(default)]
  pub total: Option<u64>,
  pub issues: Vec<RawIssue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIssue {
  pub key: String,
  #[serde(default)]
  pub fields: RawFields,
  #[serde(default)]
  pub changelog: RawChangelog,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub timespent: Option<i64>,
  #[serde(default)]
  pub updated: Option<String>,
  #[serde(default)]
  pub status: Option<Named>,
  #[serde(default)]
  pub issuetype: Option<Named>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Named {
  #[serde(default)]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChangelog {
  #[serde(default)]
  pub histories: Vec<RawHistory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHistory {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub author: Option<RawAuthor>,
  #[serde(default)]
  pub created: Option<String>,
  #[serde(default)]
  pub items: Vec<RawHistoryItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthor {
  #[serde(default)]
  pub account_id: Option<String>,
  #[serde(default)]
  pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHistoryItem {
  #[serde(default)]
  pub field: String,
  #[serde(default, deserialize_with = "string_or_number")]
  pub from: Option<String>,
  #[serde(default, deserialize_with = "string_or_number")]
  pub to: Option<String>,
}

// Seconds usually arrive as strings but some payloads carry bare numbers.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<serde_json::Value>::deserialize(de)?;

  Ok(match value {
    None | Some(serde_json::Value::Null) => None,
    Some(serde_json::Value::String(s)) => Some(s),
    Some(other) => Some(other.to_string()),
  })
}

impl RawHistory {
  pub fn author_account_id(&self) -> Option<&str> {
    self.author.as_ref().and_then(|a| a.account_id.as_deref())
  }

  pub fn timespent_items(&self) -> impl Iterator<Item = &RawHistoryItem> {
    self.items.iter().filter(|i| i.field == TIMESPENT_FIELD)
  }
}
