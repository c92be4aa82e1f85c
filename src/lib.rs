//! Report the latest tracker items assigned to (or worked on by) the current
//! user, with the time they logged, plus a small fire-and-forget launcher
//! used by the companion web endpoint.

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod credentials;
pub mod duration;
pub mod error;
pub mod jira;
pub mod launcher;
pub mod model;
pub mod query;
pub mod render;
pub mod util;

/// Exit code for command-line usage errors; distinct from every ReportError code.
pub const USAGE_EXIT_CODE: i32 = 64;
