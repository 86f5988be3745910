//! Final assembly of the two output collections.

use crate::event::{CfpEntry, ConfSummary, Event};

/// Merge per-document event lists into the full collection and derive the
/// CFP collection from it.
///
/// Archive events come first (in the order their documents were
/// discovered), the primary document's last. CFPs are the events with a
/// usable deadline, sorted ascending by it; the sort is stable so ties
/// keep their event order.
pub fn aggregate(
    archive_events: Vec<Vec<Event>>,
    primary_events: Vec<Event>,
) -> (Vec<Event>, Vec<CfpEntry>) {
    let mut all_events: Vec<Event> = archive_events.into_iter().flatten().collect();
    all_events.extend(primary_events);

    let mut all_cfps: Vec<CfpEntry> = all_events
        .iter()
        .filter_map(|event| {
            let cfp = event.cfp.as_ref()?;
            if cfp.until_date == 0 {
                return None;
            }
            Some(CfpEntry {
                link: cfp.link.clone(),
                until: cfp.until.clone(),
                until_date: cfp.until_date,
                conf: ConfSummary {
                    name: event.name.clone(),
                    date: event.date.clone(),
                    hyperlink: event.hyperlink.clone(),
                    status: event.status.clone(),
                    location: event.location.clone(),
                },
            })
        })
        .collect();
    all_cfps.sort_by_key(|cfp| cfp.until_date);

    (all_events, all_cfps)
}
