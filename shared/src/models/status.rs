//! Production status state machine
//!
//! A schedule item moves `scheduled -> in_progress/cancelled -> completed`.
//! `completed` and `cancelled` are terminal. Older documents may still carry
//! the legacy value `planned`; it normalizes to `scheduled` at the load
//! boundary and never reaches business logic.

use serde::{Deserialize, Serialize};

/// Neutral color token used for unrecognized status strings
pub const STATUS_COLOR_UNKNOWN: &str = "#9e9e9e";

/// Status of a production run in the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStatus {
    #[serde(alias = "planned")]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ProductionStatus {
    /// Parse a raw status token, normalizing the legacy `planned` value.
    ///
    /// Returns `None` for unknown tokens so transition checks fail closed.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "scheduled" | "planned" => Some(ProductionStatus::Scheduled),
            "in_progress" => Some(ProductionStatus::InProgress),
            "completed" => Some(ProductionStatus::Completed),
            "cancelled" => Some(ProductionStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionStatus::Scheduled => "scheduled",
            ProductionStatus::InProgress => "in_progress",
            ProductionStatus::Completed => "completed",
            ProductionStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses reachable from `self`
    pub fn allowed_transitions(&self) -> &'static [ProductionStatus] {
        match self {
            ProductionStatus::Scheduled => &[
                ProductionStatus::InProgress,
                ProductionStatus::Completed,
                ProductionStatus::Cancelled,
            ],
            ProductionStatus::InProgress => {
                &[ProductionStatus::Completed, ProductionStatus::Cancelled]
            }
            ProductionStatus::Completed => &[],
            ProductionStatus::Cancelled => &[],
        }
    }

    /// Whether `self -> next` is a legal transition.
    ///
    /// Self-transitions are not in the table and are therefore invalid.
    pub fn can_transition_to(&self, next: ProductionStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Terminal statuses have no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Items are editable until they reach a terminal status
    pub fn can_edit(&self) -> bool {
        matches!(
            self,
            ProductionStatus::Scheduled | ProductionStatus::InProgress
        )
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ProductionStatus::Scheduled => "Scheduled",
            ProductionStatus::InProgress => "In Progress",
            ProductionStatus::Completed => "Completed",
            ProductionStatus::Cancelled => "Cancelled",
        }
    }

    /// Calendar color token
    pub fn color(&self) -> &'static str {
        match self {
            ProductionStatus::Scheduled => "#1976d2",
            ProductionStatus::InProgress => "#f57c00",
            ProductionStatus::Completed => "#388e3c",
            ProductionStatus::Cancelled => "#d32f2f",
        }
    }
}

impl std::fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label for a raw status token, `"Unknown"` when unrecognized
pub fn status_label(raw: &str) -> &'static str {
    ProductionStatus::parse(raw).map_or("Unknown", |s| s.label())
}

/// Color token for a raw status token, neutral gray when unrecognized
pub fn status_color(raw: &str) -> &'static str {
    ProductionStatus::parse(raw).map_or(STATUS_COLOR_UNKNOWN, |s| s.color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProductionStatus::*;

    #[test]
    fn test_scheduled_transitions() {
        assert!(Scheduled.can_transition_to(InProgress));
        assert!(Scheduled.can_transition_to(Completed));
        assert!(Scheduled.can_transition_to(Cancelled));
        assert!(!Scheduled.can_transition_to(Scheduled));
    }

    #[test]
    fn test_in_progress_transitions() {
        assert!(InProgress.can_transition_to(Completed));
        assert!(InProgress.can_transition_to(Cancelled));
        assert!(!InProgress.can_transition_to(Scheduled));
        assert!(!InProgress.can_transition_to(InProgress));
    }

    #[test]
    fn test_terminal_statuses_have_no_exits() {
        for next in [Scheduled, InProgress, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Scheduled.is_terminal());
    }

    #[test]
    fn test_parse_normalizes_legacy_planned() {
        assert_eq!(ProductionStatus::parse("planned"), Some(Scheduled));
        assert_eq!(ProductionStatus::parse("scheduled"), Some(Scheduled));
    }

    #[test]
    fn test_parse_is_idempotent() {
        for status in [Scheduled, InProgress, Completed, Cancelled] {
            assert_eq!(ProductionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_parse_unknown_fails_closed() {
        assert_eq!(ProductionStatus::parse("archived"), None);
        assert_eq!(ProductionStatus::parse(""), None);
    }

    #[test]
    fn test_serde_accepts_legacy_planned() {
        let status: ProductionStatus = serde_json::from_str("\"planned\"").unwrap();
        assert_eq!(status, Scheduled);
        // Legacy value never serializes back out
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"scheduled\"");
    }

    #[test]
    fn test_unknown_status_display_defaults() {
        assert_eq!(status_label("archived"), "Unknown");
        assert_eq!(status_color("archived"), STATUS_COLOR_UNKNOWN);
        assert_eq!(status_label("planned"), "Scheduled");
    }

    #[test]
    fn test_editability() {
        assert!(Scheduled.can_edit());
        assert!(InProgress.can_edit());
        assert!(!Completed.can_edit());
        assert!(!Cancelled.can_edit());
    }
}
