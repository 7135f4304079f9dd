//! Side-by-side layout of overlapping events.
//!
//! Events are partitioned into overlap groups (connected components of the
//! interval graph, so transitive overlap counts) and each group is packed
//! into columns greedily, first-fit. Within a group every event gets a
//! column index and the group's total column count; the renderer gives each
//! event `1/total_columns` of the available width.

use chrono::{DateTime, Local};

use crate::models::event::Event;

/// Placement of one event within the day view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEntry<'a> {
    /// The laid-out event, borrowed from the input slice
    pub event: &'a Event,
    /// Column slot within the event's overlap group, starting at 0
    pub column: usize,
    /// Number of columns in the event's overlap group, at least 1
    pub total_columns: usize,
}

/// Assign a column and column count to every event.
///
/// Events are processed in ascending start order. The order is computed
/// internally with a stable sort, so callers need not pre-sort and events
/// with equal starts keep their incoming order; returned entries are in
/// input order regardless.
///
/// Column assignment within a group is deterministic first-fit: the lowest
/// free column wins, and a column is free once its last event has ended
/// (back-to-back events share a column). This is not a minimal coloring in
/// general graphs, but for interval overlap it is, and it reproduces the
/// exact column numbers the day view relies on.
///
/// Malformed events (end before start) are not rejected; their intervals
/// behave however the comparisons dictate.
pub fn layout_events(events: &[Event]) -> Vec<LayoutEntry<'_>> {
    if events.is_empty() {
        return Vec::new();
    }

    // Stable order by start time; the identity for pre-sorted input.
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&idx| events[idx].start);

    // Overlap groups: maximal runs where each event starts before the
    // running maximum end of the group so far.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current_group = vec![order[0]];
    let mut group_end = events[order[0]].end;

    for &idx in &order[1..] {
        let event = &events[idx];
        if event.start < group_end {
            current_group.push(idx);
            if event.end > group_end {
                group_end = event.end;
            }
        } else {
            groups.push(std::mem::replace(&mut current_group, vec![idx]));
            group_end = event.end;
        }
    }
    groups.push(current_group);

    log::debug!(
        "Laid out {} events into {} overlap groups",
        events.len(),
        groups.len()
    );

    let mut slots: Vec<Option<LayoutEntry<'_>>> = vec![None; events.len()];

    for group in &groups {
        // Each column remembers the end time of its last placed event.
        let mut columns: Vec<DateTime<Local>> = Vec::new();

        for &idx in group {
            let event = &events[idx];
            let column = match columns.iter().position(|&end| event.start >= end) {
                Some(free) => {
                    columns[free] = event.end;
                    free
                }
                None => {
                    columns.push(event.end);
                    columns.len() - 1
                }
            };

            slots[idx] = Some(LayoutEntry {
                event,
                column,
                total_columns: 0,
            });
        }

        // The column count is only known once the whole group is packed.
        for &idx in group {
            if let Some(entry) = slots[idx].as_mut() {
                entry.total_columns = columns.len();
            }
        }
    }

    slots.into_iter().flatten().collect()
}
