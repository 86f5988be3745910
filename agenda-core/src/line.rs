//! Event-line parsing.
//!
//! Inside a month block an event is a list item of the shape
//!
//! ```text
//! * [status] D-D: [Name](https://...) - Location <a ...>badge</a>
//! ```
//!
//! where the status bracket, the span end, the link, the location and the
//! badge are each optional. Lines that do not have a date token followed
//! by a colon are not events and are skipped.

use std::sync::OnceLock;

use regex::Regex;

use crate::anomaly::Anomaly;
use crate::event::Event;
use crate::{badge, datespan};

/// A list item whose (optionally status-prefixed) date token precedes a
/// colon. The status bracket is recognized purely by position: between the
/// list marker and the date token. Name brackets live in the remainder.
fn event_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*\*\s*(?:\[(?P<status>[^\]]*)\]\s*)?(?P<span>[0-9/-]+):(?P<rest>.*)$")
            .expect("Invalid event line regex")
    })
}

/// The conventional `[Name](url)` pair.
fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[(?P<name>[^\]]*)\]\((?P<url>[^)]*)\)").expect("Invalid link regex")
    })
}

/// An inline anchor badge; greedy so a snippet wrapping an `<img>` is kept
/// whole.
fn badge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<a\s.*</a>").expect("Invalid badge regex"))
}

/// Parse every event line of a month block, in line order. A block without
/// any matching line is an empty result, not an error.
pub fn parse_lines(
    month_text: &str,
    year: i32,
    month: u32,
    anomalies: &mut Vec<Anomaly>,
) -> Vec<Event> {
    event_line_re()
        .captures_iter(month_text)
        .map(|caps| {
            let whole = caps.get(0).map_or("", |m| m.as_str()).trim();
            let rest = caps.name("rest").map_or("", |m| m.as_str());
            let span = caps.name("span").map_or("", |m| m.as_str());

            let status = caps
                .name("status")
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_else(|| "open".to_string());

            let misc = badge_re()
                .find(rest)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let cfp = badge::decode(&misc, anomalies);

            let (name, hyperlink, link_markup) = match link_re().captures(rest) {
                Some(link) => (
                    link.name("name").map_or("", |m| m.as_str()).to_string(),
                    link.name("url").map_or("", |m| m.as_str()).to_string(),
                    link.get(0).map_or("", |m| m.as_str()).to_string(),
                ),
                None => {
                    anomalies.push(Anomaly::MissingLink(whole.to_string()));
                    (String::new(), String::new(), String::new())
                }
            };

            Event {
                name,
                date: datespan::resolve(year, month, span, anomalies),
                hyperlink,
                location: location_of(rest, &link_markup, &misc),
                misc,
                cfp,
                status,
            }
        })
        .collect()
}

/// The free text left once link markup and badge markup are gone, with the
/// " - " separator stripped off the front.
fn location_of(rest: &str, link_markup: &str, misc: &str) -> String {
    let mut text = rest.to_string();
    if !misc.is_empty() {
        text = text.replacen(misc, "", 1);
    }
    if !link_markup.is_empty() {
        text = text.replacen(link_markup, "", 1);
    }
    text.trim()
        .trim_start_matches(['-', ','])
        .trim()
        .to_string()
}
