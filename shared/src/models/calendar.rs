//! Calendar event projection output

use serde::{Deserialize, Serialize};

/// A display event derived from a schedule item.
///
/// `start`/`end` are `YYYY-MM-DDTHH:MM` local-time strings for timed events;
/// all-day events carry the bare date in `start` and no `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Source schedule item id
    pub id: String,
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub all_day: bool,
    /// Hex color token derived from the item status
    pub color: String,
    /// Raw status token for client-side filtering
    pub status: String,
}
