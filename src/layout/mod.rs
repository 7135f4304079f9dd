//! Day-view timeline layout for calendar events.
//!
//! Pure calculations consumed by a rendering layer: event durations for bar
//! heights, timeline bounds for the vertical axis, and side-by-side column
//! assignment for temporally overlapping events.

pub mod bounds;
pub mod duration;
pub mod engine;

pub use bounds::{timeline_bounds, TimelineBounds};
pub use duration::event_duration_minutes;
pub use engine::{layout_events, LayoutEntry};

/// Vertical scale used by day-view rendering, in pixels per hour.
pub const PX_PER_HOUR: f32 = 40.0;
