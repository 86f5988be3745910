//! Output data model: events and call-for-papers entries.
//!
//! Field names mirror the JSON the downstream website already consumes,
//! including the camelCase `untilDate`.

use serde::{Deserialize, Serialize};

/// One agenda event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// One timestamp for a single-day event, two for a span, as epoch
    /// milliseconds at midnight UTC. 0 stands in for an unresolvable date.
    pub date: Vec<i64>,
    pub hyperlink: String,
    pub location: String,
    /// Raw badge markup found on the line, or empty.
    pub misc: String,
    pub cfp: Option<Cfp>,
    /// Status word from the leading bracket, `"open"` when absent.
    pub status: String,
}

/// A call for papers decoded from an event's badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cfp {
    /// Submission page, from the badge's `href`; empty when absent.
    pub link: String,
    /// Human-readable deadline, e.g. "15 March 2025".
    pub until: String,
    /// Deadline as epoch milliseconds (the day after `until`, midnight UTC);
    /// 0 when the badge text was unparseable.
    pub until_date: i64,
}

/// A CFP promoted into the top-level deadline collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfpEntry {
    pub link: String,
    pub until: String,
    pub until_date: i64,
    /// The event this CFP belongs to.
    pub conf: ConfSummary,
}

/// Summary of a CFP's parent event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfSummary {
    pub name: String,
    pub date: Vec<i64>,
    pub hyperlink: String,
    pub status: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfp_serializes_until_date_as_camel_case() {
        let cfp = Cfp {
            link: "https://example.org/cfp".to_string(),
            until: "15 March 2025".to_string(),
            until_date: 1742083200000,
        };

        let json = serde_json::to_value(&cfp).unwrap();
        assert_eq!(json["untilDate"], 1742083200000i64);
        assert!(json.get("until_date").is_none());
    }

    #[test]
    fn test_event_without_cfp_serializes_null_cfp() {
        let event = Event {
            name: "SnowCamp".to_string(),
            date: vec![0],
            hyperlink: String::new(),
            location: String::new(),
            misc: String::new(),
            cfp: None,
            status: "open".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json["cfp"].is_null());
    }
}
