//! Validation utilities for the Food Production Management Platform

use chrono::NaiveTime;
use rust_decimal::Decimal;

// ============================================================================
// Production Run Validations
// ============================================================================

/// Validate a quality score is on the 1-5 scale
pub fn validate_quality_score(score: i32) -> Result<(), &'static str> {
    if !(1..=5).contains(&score) {
        return Err("Quality score must be between 1 and 5");
    }
    Ok(())
}

/// Validate a production quantity is non-negative
pub fn validate_quantity(qty: Decimal) -> Result<(), &'static str> {
    if qty < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a `HH:MM` 24-hour time string
pub fn validate_time_hhmm(time: &str) -> Result<(), &'static str> {
    parse_time_hhmm(time).map(|_| ()).ok_or("Time must be in HH:MM 24-hour format")
}

/// Parse a `HH:MM` 24-hour time string
pub fn parse_time_hhmm(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()
}

/// Validate a start/end time pair spans forward in time
pub fn validate_time_range(start: &str, end: &str) -> Result<(), &'static str> {
    let start = parse_time_hhmm(start).ok_or("Start time must be in HH:MM 24-hour format")?;
    let end = parse_time_hhmm(end).ok_or("End time must be in HH:MM 24-hour format")?;
    if end <= start {
        return Err("End time must be after start time");
    }
    Ok(())
}

/// Validate an ISO `YYYY-MM-DD` date string
pub fn validate_iso_date(date: &str) -> Result<(), &'static str> {
    chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| "Date must be in YYYY-MM-DD format")
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate an actor/staff name is present
pub fn validate_actor_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name is required");
    }
    Ok(())
}

/// Validate a recipe product code (non-empty alphanumeric, dashes allowed)
pub fn validate_recipe_code(code: &str) -> Result<(), &'static str> {
    if code.trim().is_empty() {
        return Err("Recipe code is required");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("Recipe code must be alphanumeric");
    }
    Ok(())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every well-formed HH:MM time validates and parses
        #[test]
        fn prop_valid_times_always_parse(hour in 0u32..24, minute in 0u32..60) {
            let time = format!("{:02}:{:02}", hour, minute);
            prop_assert!(validate_time_hhmm(&time).is_ok());
            prop_assert!(parse_time_hhmm(&time).is_some());
        }

        /// Quality scores validate exactly on the 1-5 scale
        #[test]
        fn prop_quality_score_bounds(score in -100i32..100) {
            prop_assert_eq!(
                validate_quality_score(score).is_ok(),
                (1..=5).contains(&score)
            );
        }

        /// Non-negative quantities always validate
        #[test]
        fn prop_non_negative_quantities(value in 0u64..1_000_000) {
            prop_assert!(validate_quantity(Decimal::from(value)).is_ok());
        }
    }
}
