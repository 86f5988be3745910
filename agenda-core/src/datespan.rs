//! Date-span resolution for event lines.
//!
//! A span token is `D`, `D-D`, or `D-D/D`, interpreted against the
//! (year, month) of the enclosing month block. The end day lands in the
//! next month either explicitly (the slash form, where the digits after
//! the slash are display-only) or implicitly (end day smaller than the
//! start day).

use chrono::{NaiveDate, NaiveTime};

use crate::anomaly::Anomaly;

/// Resolve a span token into one or two midnight-UTC timestamps in epoch
/// milliseconds. Unresolvable days come back as 0 with an anomaly recorded.
pub fn resolve(year: i32, month: u32, token: &str, anomalies: &mut Vec<Anomaly>) -> Vec<i64> {
    match token.split_once('-') {
        None => {
            let day = parse_day(token, token, anomalies);
            vec![midnight_millis(year, month, day, anomalies)]
        }
        Some((start, end)) => {
            let start_day = parse_day(start, token, anomalies);
            if let Some((end_day, _display_only)) = end.split_once('/') {
                // "31-02/04": ends on day 2 of the next month, "/04" is the
                // end month as written in the document, not used here
                let end_day = parse_day(end_day, token, anomalies);
                let (end_year, end_month) = next_month(year, month);
                vec![
                    midnight_millis(year, month, start_day, anomalies),
                    midnight_millis(end_year, end_month, end_day, anomalies),
                ]
            } else {
                let end_day = parse_day(end, token, anomalies);
                if end_day < start_day {
                    // implicit rollover, e.g. "28-02" for Feb 28 - Mar 2
                    let (end_year, end_month) = next_month(year, month);
                    vec![
                        midnight_millis(year, month, start_day, anomalies),
                        midnight_millis(end_year, end_month, end_day, anomalies),
                    ]
                } else {
                    vec![
                        midnight_millis(year, month, start_day, anomalies),
                        midnight_millis(year, month, end_day, anomalies),
                    ]
                }
            }
        }
    }
}

/// The (year, zero-based month) following the given month. Only a valid
/// December wraps the year; the unknown-month sentinel stays out of range
/// and surfaces as an invalid date.
fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 11 { (year + 1, 0) } else { (year, month + 1) }
}

fn parse_day(raw: &str, token: &str, anomalies: &mut Vec<Anomaly>) -> u32 {
    match raw.trim().parse() {
        Ok(day) => day,
        Err(_) => {
            anomalies.push(Anomaly::BadDateSpan(token.to_string()));
            0
        }
    }
}

/// Midnight UTC on the given day as epoch milliseconds, or 0 when the day
/// does not exist in that month.
fn midnight_millis(year: i32, month: u32, day: u32, anomalies: &mut Vec<Anomaly>) -> i64 {
    match NaiveDate::from_ymd_opt(year, month + 1, day) {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
        None => {
            anomalies.push(Anomaly::InvalidDate { year, month, day });
            0
        }
    }
}
