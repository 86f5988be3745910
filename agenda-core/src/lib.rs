//! Core parsing and aggregation for markdown conference agendas.
//!
//! An agenda document groups events under `## <year>` and `### <Month>`
//! headings, one `*` list item per event. This crate turns such documents
//! into two collections: every event, and every open call for papers sorted
//! by deadline. It does no I/O; the CLI feeds it document text and writes
//! the results out.

pub mod aggregate;
pub mod anomaly;
pub mod archives;
pub mod badge;
pub mod blocks;
pub mod datespan;
pub mod event;
pub mod line;
pub mod months;

pub use anomaly::Anomaly;
pub use event::{Cfp, CfpEntry, ConfSummary, Event};

/// Parse one whole document into its events, in document order.
///
/// Anomalies encountered along the way (unknown month names, malformed
/// dates, linkless event lines) are appended to `anomalies`; they never
/// abort the parse.
pub fn extract_events(document: &str, anomalies: &mut Vec<Anomaly>) -> Vec<Event> {
    blocks::segment(document, anomalies)
        .iter()
        .flat_map(|year| {
            year.months
                .iter()
                .flat_map(|month| line::parse_lines(month.text, year.year, month.month, anomalies))
                .collect::<Vec<_>>()
        })
        .collect()
}
