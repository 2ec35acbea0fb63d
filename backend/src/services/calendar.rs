//! Calendar projection of the production schedule
//!
//! A pure derivation from schedule state to display events: no store access,
//! no clock, stable ordering (schedule order, then item index). Re-running on
//! identical input yields identical output, so callers may memoize freely.

use shared::{parse_time_hhmm, CalendarEvent, Schedule, ScheduleItem};

/// Project display events from the current schedules
pub fn project_events(schedules: &[Schedule]) -> Vec<CalendarEvent> {
    schedules
        .iter()
        .flat_map(|schedule| schedule.items.iter().map(item_event))
        .collect()
}

fn item_event(item: &ScheduleItem) -> CalendarEvent {
    let date = item.date.format("%Y-%m-%d").to_string();
    let timed = match (item.start_time.as_deref(), item.end_time.as_deref()) {
        (Some(start), Some(end)) => {
            // Unparseable times degrade to an all-day event
            match (parse_time_hhmm(start), parse_time_hhmm(end)) {
                (Some(_), Some(_)) => Some((start, end)),
                _ => None,
            }
        }
        _ => None,
    };

    let (start, end, all_day) = match timed {
        Some((start_time, end_time)) => (
            format!("{}T{}", date, start_time),
            Some(format!("{}T{}", date, end_time)),
            false,
        ),
        None => (date, None, true),
    };

    CalendarEvent {
        id: item.id.clone(),
        title: event_title(item),
        start,
        end,
        all_day,
        color: item.status.color().to_string(),
        status: item.status.as_str().to_string(),
    }
}

fn event_title(item: &ScheduleItem) -> String {
    if item.handler_name.is_empty() {
        format!("{} ({})", item.recipe_description, item.planned_qty)
    } else {
        format!(
            "{} ({}) - {}",
            item.recipe_description, item.planned_qty, item.handler_name
        )
    }
}
