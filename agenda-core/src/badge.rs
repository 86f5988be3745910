//! CFP badge decoding.
//!
//! Events advertise an open call for papers with an inline shields.io
//! badge, e.g.
//!
//! ```text
//! <a href="https://mixitconf.org/cfp"><img src="https://img.shields.io/static/v1?label=CFP&message=until%2015%20January%202025&color=red"></a>
//! ```
//!
//! The `label` parameter marks the badge as a CFP, `message` carries the
//! deadline as "until <day> <Month> <year>", and the anchor's `href` points
//! at the submission page.

use std::sync::OnceLock;

use chrono::{Days, NaiveDate, NaiveTime};
use regex::Regex;

use crate::anomaly::Anomaly;
use crate::event::Cfp;
use crate::months;

fn label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"label=([^&"]*)"#).expect("Invalid label regex"))
}

fn message_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"message=([^&"]*)"#).expect("Invalid message regex"))
}

fn href_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"href="([^"]*)""#).expect("Invalid href regex"))
}

/// Decode a badge snippet into a CFP. Returns `None` for anything that is
/// not a shields.io badge whose `label` contains "cfp" (any case).
pub fn decode(snippet: &str, anomalies: &mut Vec<Anomaly>) -> Option<Cfp> {
    if snippet.is_empty() || !snippet.contains("shields.io") {
        return None;
    }
    let label = capture(label_re(), snippet)?;
    if !label.to_ascii_lowercase().contains("cfp") {
        return None;
    }

    let message = capture(message_re(), snippet).unwrap_or_default();
    // keep the raw text when the percent-encoding itself is broken
    let decoded = urlencoding::decode(&message)
        .map(|s| s.into_owned())
        .unwrap_or(message);
    let until = decoded.replace("until", "").trim().to_string();

    let until_date = match deadline_millis(&until) {
        Some(millis) => millis,
        None => {
            anomalies.push(Anomaly::BadDeadline(until.clone()));
            0
        }
    };

    Some(Cfp {
        link: capture(href_re(), snippet).unwrap_or_default(),
        until,
        until_date,
    })
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].to_string())
}

/// Deadline timestamp for text like "15 March 2025": leading digits are the
/// day, the letters are the month name, trailing digits are the year. The
/// stored instant is midnight on the day *after* the written one ("until
/// the 15th" closes at the end of the 15th), so a last-day-of-month
/// deadline rolls into the next month.
fn deadline_millis(text: &str) -> Option<i64> {
    let day: u64 = take_digits(text.chars())?.parse().ok()?;
    let year: i32 = take_digits(text.chars().rev())?
        .chars()
        .rev()
        .collect::<String>()
        .parse()
        .ok()?;
    let name: String = text.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let month = months::month_index(&name)?;

    let deadline = NaiveDate::from_ymd_opt(year, month + 1, 1)?.checked_add_days(Days::new(day))?;
    Some(deadline.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// The run of ASCII digits at the front of `chars`, or `None` when it is
/// empty.
fn take_digits(chars: impl Iterator<Item = char>) -> Option<String> {
    let digits: String = chars.take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE: &str = "<a href=\"https://mixitconf.org/cfp\"><img src=\"https://img.shields.io/static/v1?label=CFP&message=until%2015%20March%202025&color=red\"></a>";

    fn millis(year: i32, month1: u32, day: u32) -> i64 {
        NaiveDate::from_ymd_opt(year, month1, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis()
    }

    #[test]
    fn test_decode_full_badge() {
        let mut anomalies = Vec::new();
        let cfp = decode(BADGE, &mut anomalies).unwrap();

        assert_eq!(cfp.link, "https://mixitconf.org/cfp");
        assert_eq!(cfp.until, "15 March 2025");
        // deadline is stored one day after the written date
        assert_eq!(cfp.until_date, millis(2025, 3, 16));
        assert!(anomalies.is_empty());
    }

    #[test]
    fn test_empty_and_non_shields_snippets_are_not_cfps() {
        let mut anomalies = Vec::new();
        assert_eq!(decode("", &mut anomalies), None);
        assert_eq!(
            decode("<a href=\"https://example.org\">badge</a>", &mut anomalies),
            None
        );
    }

    #[test]
    fn test_label_must_contain_cfp_case_insensitively() {
        let mut anomalies = Vec::new();
        let sponsor = BADGE.replace("label=CFP", "label=sponsor");
        assert_eq!(decode(&sponsor, &mut anomalies), None);

        let lowercase = BADGE.replace("label=CFP", "label=cfp%20open");
        assert!(decode(&lowercase, &mut anomalies).is_some());
    }

    #[test]
    fn test_missing_href_leaves_link_empty() {
        let mut anomalies = Vec::new();
        let bare = "<img src=\"https://img.shields.io/static/v1?label=CFP&message=until%203%20May%202025&color=red\">";
        let cfp = decode(bare, &mut anomalies).unwrap();
        assert_eq!(cfp.link, "");
        assert_eq!(cfp.until_date, millis(2025, 5, 4));
    }

    #[test]
    fn test_deadline_on_last_day_rolls_into_next_month() {
        let mut anomalies = Vec::new();
        let badge = BADGE.replace("until%2015%20March%202025", "until%2031%20March%202025");
        let cfp = decode(&badge, &mut anomalies).unwrap();
        assert_eq!(cfp.until_date, millis(2025, 4, 1));
    }

    #[test]
    fn test_unparseable_deadline_keeps_text_but_zeroes_timestamp() {
        let mut anomalies = Vec::new();
        let badge = BADGE.replace("until%2015%20March%202025", "until%20soon");
        let cfp = decode(&badge, &mut anomalies).unwrap();

        assert_eq!(cfp.until, "soon");
        assert_eq!(cfp.until_date, 0);
        assert_eq!(anomalies, vec![Anomaly::BadDeadline("soon".to_string())]);
    }

    #[test]
    fn test_unknown_month_name_in_deadline_is_an_anomaly() {
        let mut anomalies = Vec::new();
        let badge = BADGE.replace("March", "Mars");
        let cfp = decode(&badge, &mut anomalies).unwrap();

        assert_eq!(cfp.until, "15 Mars 2025");
        assert_eq!(cfp.until_date, 0);
        assert_eq!(anomalies.len(), 1);
    }
}
