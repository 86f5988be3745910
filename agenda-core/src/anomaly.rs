//! Structural parse anomalies.
//!
//! The agenda documents are hand-maintained, so a single malformed line
//! must never abort a run. Parsers record what they could not make sense
//! of here and substitute placeholder values (month index 12, timestamp 0,
//! empty strings) so the rest of the document still goes through.

use thiserror::Error;

/// A non-fatal problem found while parsing a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    #[error("unrecognized month name '{0}' in heading")]
    UnknownMonthName(String),

    #[error("malformed year heading '{0}'")]
    MalformedYear(String),

    #[error("no such calendar date: year {year}, month index {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("malformed date span token '{0}'")]
    BadDateSpan(String),

    #[error("event line has no [name](url) link: '{0}'")]
    MissingLink(String),

    #[error("badge deadline '{0}' could not be parsed")]
    BadDeadline(String),
}
