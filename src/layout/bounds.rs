//! Timeline bounds: which hours the day view displays.

use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::utils::date::minute_of_day;

/// Hour range displayed by the day-view timeline.
///
/// `start_hour` is inclusive, `end_hour` is the last gridline drawn; the
/// renderer sizes its vertical axis from this range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBounds {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for TimelineBounds {
    /// Working-day fallback shown when no timed events exist.
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 18,
        }
    }
}

/// Compute the hour range that covers every timed event.
///
/// All-day events are skipped entirely; with no timed events the default
/// 08:00-18:00 range applies. The earliest start is floored to its hour and
/// the latest end is ceiled, except that an event ending exactly on the hour
/// does not force an extra hour of display.
///
/// Only the local hour:minute of each endpoint is examined, never the date.
/// An event whose end falls on a later calendar day contributes that day's
/// own clock time, not the elapsed time since its start.
pub fn timeline_bounds(events: &[Event]) -> TimelineBounds {
    let mut timed = 0usize;
    let mut earliest_minute = u32::MAX;
    let mut latest_minute = 0u32;

    for event in events.iter().filter(|e| !e.all_day) {
        timed += 1;
        earliest_minute = earliest_minute.min(minute_of_day(event.start));
        latest_minute = latest_minute.max(minute_of_day(event.end));
    }

    if timed == 0 {
        return TimelineBounds::default();
    }

    let start_hour = earliest_minute / 60;
    let end_hour = if latest_minute % 60 == 0 {
        latest_minute / 60
    } else {
        latest_minute / 60 + 1
    };

    log::debug!(
        "Timeline bounds {}..{} from {} timed events",
        start_hour,
        end_hour,
        timed
    );

    TimelineBounds {
        start_hour,
        end_hour,
    }
}
