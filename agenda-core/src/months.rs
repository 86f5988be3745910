//! The twelve English month names recognized in headings and badge text.

/// Month names in order; a name's position is its zero-based month number.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sentinel month index for a heading whose name is not recognized.
/// Out of the valid 0-11 range, so date resolution flags it instead of
/// fabricating a date.
pub const UNKNOWN_MONTH: u32 = 12;

/// Zero-based index of an English month name. Case-sensitive: the source
/// documents capitalize month names, and always have.
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES.iter().position(|m| *m == name).map(|i| i as u32)
}
