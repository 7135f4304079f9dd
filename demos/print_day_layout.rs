//! Print the computed day-view layout for a sample set of events.
//! Run with:
//!   cargo run --example print_day_layout
//!   RUST_LOG=debug cargo run --example print_day_layout   # with layout tracing

use anyhow::Result;
use calendar_layout::layout::{
    event_duration_minutes, layout_events, timeline_bounds, PX_PER_HOUR,
};
use calendar_layout::models::event::{sort_events, Event};

const SAMPLE_DAY: &str = r#"[
    { "title": "Team Offsite", "start": "2026-02-12", "end": "2026-02-13", "allDay": true },
    { "title": "Planning", "start": "2026-02-12T09:00:00", "end": "2026-02-12T10:30:00" },
    { "title": "Standup", "start": "2026-02-12T10:00:00", "end": "2026-02-12T10:30:00" },
    { "title": "1:1", "start": "2026-02-12T10:00:00", "end": "2026-02-12T10:45:00" },
    { "title": "Lunch", "start": "2026-02-12T12:00:00", "end": "2026-02-12T13:00:00" },
    { "title": "Design Review", "start": "2026-02-12T14:00:00", "end": "2026-02-12T15:30:00" }
]"#;

fn main() -> Result<()> {
    env_logger::init();

    let mut events: Vec<Event> = serde_json::from_str(SAMPLE_DAY)?;
    sort_events(&mut events);

    let bounds = timeline_bounds(&events);
    println!(
        "Timeline {:02}:00 - {:02}:00 ({} px tall at {} px/hour)",
        bounds.start_hour,
        bounds.end_hour,
        (bounds.end_hour - bounds.start_hour) as f32 * PX_PER_HOUR,
        PX_PER_HOUR
    );

    for event in events.iter().filter(|e| e.all_day) {
        println!("  [all day] {}", event.title);
    }

    let timed: Vec<Event> = events.iter().filter(|e| !e.all_day).cloned().collect();
    for entry in layout_events(&timed) {
        println!(
            "  {} - {}  col {}/{}  {:>3} min  {}",
            entry.event.start.format("%H:%M"),
            entry.event.end.format("%H:%M"),
            entry.column + 1,
            entry.total_columns,
            event_duration_minutes(entry.event),
            entry.event.title
        );
    }

    log::info!("Laid out {} timed events", timed.len());
    Ok(())
}
