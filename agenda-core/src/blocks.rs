//! Heading-based block segmentation.
//!
//! `## 2024` opens a year block and `### March` a month block inside it.
//! A block owns the text from its own heading up to the next heading at
//! the same level (or the end of the enclosing text), so sibling blocks
//! are contiguous and concatenating them reproduces the enclosing text.

use std::sync::OnceLock;

use regex::Regex;

use crate::anomaly::Anomaly;
use crate::months;

/// A `## <year>` heading and everything it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBlock<'a> {
    /// 0 with an anomaly recorded when the heading digits do not fit a
    /// year.
    pub year: i32,
    pub text: &'a str,
    pub months: Vec<MonthBlock<'a>>,
}

/// A `### <Month>` heading and everything it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBlock<'a> {
    /// Zero-based month number, or [`months::UNKNOWN_MONTH`] when the
    /// heading word is not an English month name.
    pub month: u32,
    pub text: &'a str,
}

fn year_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^## (\d+)\r?$").expect("Invalid year heading regex"))
}

fn month_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^### (\w+)\r?$").expect("Invalid month heading regex"))
}

/// Split a document into its year blocks, each carrying its month blocks.
/// A document without year headings is simply empty.
pub fn segment<'a>(document: &'a str, anomalies: &mut Vec<Anomaly>) -> Vec<YearBlock<'a>> {
    let headings: Vec<(usize, i32)> = year_heading_re()
        .captures_iter(document)
        .map(|caps| {
            let offset = caps.get(0).map_or(0, |m| m.start());
            let digits = caps.get(1).map_or("", |m| m.as_str());
            let year = digits.parse().unwrap_or_else(|_| {
                anomalies.push(Anomaly::MalformedYear(digits.to_string()));
                0
            });
            (offset, year)
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(i, (start, year))| {
            let end = headings.get(i + 1).map_or(document.len(), |(next, _)| *next);
            let text = &document[*start..end];
            YearBlock { year: *year, text, months: month_blocks(text, anomalies) }
        })
        .collect()
}

fn month_blocks<'a>(year_text: &'a str, anomalies: &mut Vec<Anomaly>) -> Vec<MonthBlock<'a>> {
    let headings: Vec<(usize, u32)> = month_heading_re()
        .captures_iter(year_text)
        .map(|caps| {
            let offset = caps.get(0).map_or(0, |m| m.start());
            let name = caps.get(1).map_or("", |m| m.as_str());
            let month = months::month_index(name).unwrap_or_else(|| {
                anomalies.push(Anomaly::UnknownMonthName(name.to_string()));
                months::UNKNOWN_MONTH
            });
            (offset, month)
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(i, (start, month))| {
            let end = headings.get(i + 1).map_or(year_text.len(), |(next, _)| *next);
            MonthBlock { month: *month, text: &year_text[*start..end] }
        })
        .collect()
}
