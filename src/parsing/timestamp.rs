//! Timestamp parsing for header lines.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::{DateOrder, MeridiemMarkers};

/// Chrono format for the clock field: 12-hour when a meridiem marker was
/// present, 24-hour otherwise.
pub fn clock_format(twelve_hour: bool) -> &'static str {
    if twelve_hour { "%I:%M %p" } else { "%H:%M" }
}

/// Parses a header's date and time.
///
/// Returns `None` (the unparseable sentinel) when the fields do not form a
/// real point in time under the configured convention, e.g. month 13,
/// `31/2/23` or `0:30 AM`. An unrecognized marker is also unparseable.
pub fn parse_timestamp(
    date: &str,
    clock: &str,
    meridiem: Option<&str>,
    order: DateOrder,
    markers: &MeridiemMarkers,
) -> Option<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(date, order.date_format()).ok()?;

    let time = match meridiem {
        Some(marker) => {
            let canonical = markers.resolve(marker)?;
            let clock = format!("{clock} {}", canonical.as_str());
            NaiveTime::parse_from_str(&clock, clock_format(true))
        }
        None => NaiveTime::parse_from_str(clock, clock_format(false)),
    }
    .ok()?;

    Some(day.and_time(time))
}
