// Property-based tests for the layout calculations
// Random event sets exercise the grouping, packing, and bounds invariants

use calendar_layout::layout::{event_duration_minutes, layout_events, timeline_bounds};
use calendar_layout::models::event::Event;
use calendar_layout::utils::date::minute_of_day;
use chrono::{DateTime, Duration, Local, TimeZone};
use proptest::prelude::*;

fn day_base() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 2, 12, 0, 0, 0).unwrap()
}

fn event_at(start_minute: u32, duration_minutes: u32, all_day: bool) -> Event {
    let start = day_base() + Duration::minutes(i64::from(start_minute));
    let end = start + Duration::minutes(i64::from(duration_minutes));
    Event {
        id: None,
        title: format!("Event @{start_minute}+{duration_minutes}"),
        description: None,
        location: None,
        start,
        end,
        all_day,
        category: None,
        color: None,
    }
}

// Timed events that start and end within one calendar day
fn timed_day_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0u32..1200, 1u32..=239), 0..12)
        .prop_map(|params| {
            params
                .into_iter()
                .map(|(start, duration)| event_at(start, duration, false))
                .collect()
        })
}

fn overlaps(a: &Event, b: &Event) -> bool {
    a.start < b.end && b.start < a.end
}

proptest! {
    /// Output preserves input length and order, and every column index is
    /// strictly below its group's column count.
    #[test]
    fn prop_layout_preserves_order_and_column_invariant(events in timed_day_events()) {
        let result = layout_events(&events);

        prop_assert_eq!(result.len(), events.len());
        for (entry, event) in result.iter().zip(events.iter()) {
            prop_assert!(std::ptr::eq(entry.event, event));
            prop_assert!(entry.total_columns >= 1);
            prop_assert!(entry.column < entry.total_columns);
        }
    }

    /// Two events whose intervals truly intersect never share a column.
    #[test]
    fn prop_overlapping_events_never_share_a_column(events in timed_day_events()) {
        let result = layout_events(&events);

        for i in 0..result.len() {
            for j in (i + 1)..result.len() {
                if overlaps(result[i].event, result[j].event) {
                    prop_assert_ne!(
                        result[i].column,
                        result[j].column,
                        "{} and {} overlap",
                        result[i].event.title,
                        result[j].event.title
                    );
                }
            }
        }
    }

    /// The widest group is exactly as wide as the deepest simultaneous
    /// overlap. For interval overlap, greedy first-fit in start order never
    /// opens a column beyond the maximum concurrency.
    #[test]
    fn prop_widest_group_matches_max_concurrency(events in timed_day_events()) {
        prop_assume!(!events.is_empty());
        let result = layout_events(&events);

        let widest = result.iter().map(|e| e.total_columns).max().unwrap_or(0);
        let deepest = events
            .iter()
            .map(|probe| {
                events
                    .iter()
                    .filter(|e| e.start <= probe.start && probe.start < e.end)
                    .count()
            })
            .max()
            .unwrap_or(0);

        prop_assert_eq!(widest, deepest);
    }

    /// Bounds contain every timed event: floored start hour, ceiled end hour
    /// unless the latest end falls exactly on the hour.
    #[test]
    fn prop_bounds_contain_every_timed_event(events in timed_day_events()) {
        prop_assume!(!events.is_empty());
        let bounds = timeline_bounds(&events);

        let min_start = events.iter().map(|e| minute_of_day(e.start)).min().unwrap_or(0);
        let max_end = events.iter().map(|e| minute_of_day(e.end)).max().unwrap_or(0);

        prop_assert!(bounds.start_hour < bounds.end_hour);
        prop_assert_eq!(bounds.start_hour, min_start / 60);
        prop_assert!(bounds.end_hour * 60 >= max_end);
        // Tight: never more than a full spare hour on either side
        prop_assert!(min_start - bounds.start_hour * 60 < 60);
        prop_assert!(bounds.end_hour * 60 - max_end < 60);
    }

    /// All-day events neither affect the bounds nor carry a timed duration.
    #[test]
    fn prop_all_day_events_are_inert(
        timed in timed_day_events(),
        all_day_count in 0usize..4,
    ) {
        let mut mixed = timed.clone();
        for _ in 0..all_day_count {
            mixed.insert(0, event_at(0, 1440, true));
        }

        prop_assert_eq!(timeline_bounds(&mixed), timeline_bounds(&timed));
        for event in mixed.iter().filter(|e| e.all_day) {
            prop_assert_eq!(event_duration_minutes(event), 0.0);
        }
    }

    /// Durations are non-negative for any interval, including reversed ones.
    #[test]
    fn prop_duration_is_non_negative(
        start in 0u32..1440,
        end in 0u32..1440,
    ) {
        let mut event = event_at(start, 0, false);
        event.end = day_base() + Duration::minutes(i64::from(end));

        let minutes = event_duration_minutes(&event);
        prop_assert!(minutes >= 0.0);
        prop_assert_eq!(minutes, f64::from(end.abs_diff(start)));
    }
}
