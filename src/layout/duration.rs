//! Event duration used for bar-height rendering.

use crate::models::event::Event;

/// Duration of an event in minutes.
///
/// All-day events have no meaningful timed duration for a bar and return 0.
/// The span is taken as an absolute value, so malformed events whose end
/// precedes their start still yield a non-negative duration rather than an
/// error.
pub fn event_duration_minutes(event: &Event) -> f64 {
    if event.all_day {
        return 0.0;
    }

    let millis = (event.end - event.start).num_milliseconds().abs();
    millis as f64 / 60_000.0
}
