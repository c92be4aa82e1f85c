//! Hours/minutes/seconds splitting and `HH:MM:SS` rendering for tracked time.
//!
//! Deltas from the tracker can be negative (a time-tracking field that went
//! down), so everything here is signed. Each component of the split carries
//! the sign of the input, which keeps `h * 3600 + m * 60 + s == seconds`
//! exact for every input.

/// Split a signed second count into `(hours, minutes, seconds)`.
pub fn split_seconds(seconds: i64) -> (i64, i64, i64) {
  let hours = seconds / 3600;
  let minutes = (seconds % 3600) / 60;
  let secs = seconds % 60;
  (hours, minutes, secs)
}

/// Same as [`split_seconds`], treating an absent value as zero.
pub fn split_optional(seconds: Option<i64>) -> (i64, i64, i64) {
  split_seconds(seconds.unwrap_or(0))
}

/// Render seconds as zero-padded `HH:MM:SS`; negative values get a leading `-`.
pub fn format_hms(seconds: i64) -> String {
  let (h, m, s) = split_seconds(seconds);
  let sign = if seconds < 0 { "-" } else { "" };
  format!("{}{:02}:{:02}:{:02}", sign, h.abs(), m.abs(), s.abs())
}
