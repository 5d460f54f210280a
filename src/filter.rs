use std::{fmt, io};

use serde_json::Value;

use crate::model::LogEntry;

/// Raw substrings a line must contain before it is worth parsing. Matched
/// byte-for-byte, so `"@l": "Error"` (with a space) does not qualify.
pub const LEVEL_MARKERS: [&str; 2] = ["\"@l\":\"Error\"", "\"@l\":\"Warning\""];
pub const KEYWORD: &str = "Spotify";
pub const MAX_MATCHES: usize = 30;

#[derive(Debug)]
pub enum Malformed {
    Json(serde_json::Error),
    NotAnObject,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Json(err) => write!(f, "invalid JSON: {err}"),
            Malformed::NotAnObject => f.write_str("JSON value is not an object"),
        }
    }
}

#[derive(Debug)]
pub enum LineOutcome {
    /// Rejected by the level pre-filter without parsing.
    Filtered,
    Malformed(Malformed),
    /// Parsed, but the message does not mention the keyword.
    Unrelated,
    Matched(LogEntry),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub matched: usize,
    pub malformed: usize,
    pub unrelated: usize,
}

pub fn passes_level_prefilter(line: &str) -> bool {
    LEVEL_MARKERS.iter().any(|marker| line.contains(marker))
}

pub fn classify_line(line: &str) -> LineOutcome {
    if !passes_level_prefilter(line) {
        return LineOutcome::Filtered;
    }

    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => return LineOutcome::Malformed(Malformed::Json(err)),
    };
    let Value::Object(object) = value else {
        return LineOutcome::Malformed(Malformed::NotAnObject);
    };

    let entry = LogEntry::from_object(&object);
    if entry.message.contains(KEYWORD) {
        LineOutcome::Matched(entry)
    } else {
        LineOutcome::Unrelated
    }
}

/// Walks `lines` newest-first and hands each match to `sink` until
/// [`MAX_MATCHES`] have been emitted.
pub fn scan<F>(lines: &[String], mut sink: F) -> io::Result<ScanSummary>
where
    F: FnMut(&LogEntry) -> io::Result<()>,
{
    let mut summary = ScanSummary::default();

    for line in lines.iter().rev() {
        if summary.matched >= MAX_MATCHES {
            break;
        }
        summary.scanned += 1;

        match classify_line(line) {
            LineOutcome::Filtered => {}
            LineOutcome::Malformed(reason) => {
                tracing::trace!(%reason, "skipping malformed line");
                summary.malformed += 1;
            }
            LineOutcome::Unrelated => summary.unrelated += 1,
            LineOutcome::Matched(entry) => {
                sink(&entry)?;
                summary.matched += 1;
            }
        }
    }

    Ok(summary)
}
