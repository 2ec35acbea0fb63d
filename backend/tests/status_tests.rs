//! Production status state machine tests
//!
//! Tests for status transitions including:
//! - Transition closure over the full status set
//! - Legacy `planned` normalization

use proptest::prelude::*;

use shared::{status_color, status_label, ProductionStatus, STATUS_COLOR_UNKNOWN};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;
    use ProductionStatus::*;

    const ALL: [ProductionStatus; 4] = [Scheduled, InProgress, Completed, Cancelled];

    /// The only legal transitions are the five in the table
    #[test]
    fn test_transition_closure() {
        let allowed = [
            (Scheduled, InProgress),
            (Scheduled, Completed),
            (Scheduled, Cancelled),
            (InProgress, Completed),
            (InProgress, Cancelled),
        ];

        for from in ALL {
            for to in ALL {
                let expected = allowed.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "transition {:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    /// Self-transitions are invalid for every status
    #[test]
    fn test_no_self_transitions() {
        for status in ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    /// Terminal statuses have no outgoing transitions at all
    #[test]
    fn test_terminal_statuses() {
        for to in ALL {
            assert!(!Completed.can_transition_to(to));
            assert!(!Cancelled.can_transition_to(to));
        }
    }

    /// Legacy `planned` normalizes to scheduled
    #[test]
    fn test_legacy_planned_normalization() {
        assert_eq!(ProductionStatus::parse("planned"), Some(Scheduled));
        // Normalization happens at the serde boundary too
        let parsed: ProductionStatus = serde_json::from_str("\"planned\"").unwrap();
        assert_eq!(parsed, Scheduled);
    }

    /// Unknown statuses fail closed on checks and display as neutral
    #[test]
    fn test_unknown_status_defaults() {
        assert_eq!(ProductionStatus::parse("archived"), None);
        assert_eq!(status_label("archived"), "Unknown");
        assert_eq!(status_color("archived"), STATUS_COLOR_UNKNOWN);
    }

    /// Every status has a distinct color and label
    #[test]
    fn test_display_tables_are_total() {
        let mut colors: Vec<&str> = ALL.iter().map(|s| s.color()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), ALL.len());

        for status in ALL {
            assert!(!status.label().is_empty());
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn status_strategy() -> impl Strategy<Value = ProductionStatus> {
        prop_oneof![
            Just(ProductionStatus::Scheduled),
            Just(ProductionStatus::InProgress),
            Just(ProductionStatus::Completed),
            Just(ProductionStatus::Cancelled),
        ]
    }

    proptest! {
        /// Property: normalization is idempotent for every input
        #[test]
        fn prop_parse_is_idempotent(raw in "[a-z_]{0,12}") {
            match ProductionStatus::parse(&raw) {
                Some(status) => {
                    // A normalized token parses back to itself
                    prop_assert_eq!(ProductionStatus::parse(status.as_str()), Some(status));
                }
                None => {
                    // Unknown stays unknown; display falls back to neutral
                    prop_assert_eq!(status_label(&raw), "Unknown");
                }
            }
        }

        /// Property: transitions out of terminal statuses never validate
        #[test]
        fn prop_terminal_statuses_reject_everything(to in status_strategy()) {
            prop_assert!(!ProductionStatus::Completed.can_transition_to(to));
            prop_assert!(!ProductionStatus::Cancelled.can_transition_to(to));
        }

        /// Property: allowed_transitions and can_transition_to agree
        #[test]
        fn prop_transition_table_consistency(from in status_strategy(), to in status_strategy()) {
            prop_assert_eq!(
                from.can_transition_to(to),
                from.allowed_transitions().contains(&to)
            );
        }
    }
}
