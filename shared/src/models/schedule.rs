//! Schedule and schedule item models
//!
//! A schedule is the document grouping one department's production runs for
//! a given date. Items flow through the production status machine and carry
//! an append-only change history; on completion they are moved out of the
//! schedule into an audit record.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::status::ProductionStatus;
use crate::types::Department;

/// One department's production schedule for a date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Store-assigned identifier, empty until first save
    #[serde(default)]
    pub id: String,
    pub department: Department,
    pub date: NaiveDate,
    pub items: Vec<ScheduleItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    pub fn item(&self, item_id: &str) -> Option<&ScheduleItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut ScheduleItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }
}

/// One planned, in-flight or completed production run of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Stable identifier, `{date}-{recipe_code}-{millis}`; immutable
    pub id: String,
    pub recipe_code: String,
    pub recipe_description: String,
    pub planned_qty: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_qty: Option<Decimal>,
    pub handler_name: String,
    pub manager_name: String,
    pub date: NaiveDate,
    /// `HH:MM` 24-hour, optional; items without times show as all-day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub status: ProductionStatus,
    /// Append-only, chronological
    #[serde(default)]
    pub change_history: Vec<ChangeHistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<i32>,
    #[serde(default)]
    pub notes: String,
    /// Defaults to `["none"]` when production starts clean
    #[serde(default)]
    pub deviations: Vec<String>,
    /// Per-ingredient supplier overrides, index-aligned with the recipe
    #[serde(default)]
    pub ingredient_suppliers: Vec<Option<String>>,
    #[serde(default)]
    pub batch_codes: Vec<Option<String>>,
    #[serde(default)]
    pub sell_by_dates: Vec<Option<String>>,
    #[serde(default)]
    pub receiving_dates: Vec<Option<String>>,
}

impl ScheduleItem {
    /// Supplier override for ingredient `index`, if one was entered
    pub fn supplier_override(&self, index: usize) -> Option<&str> {
        self.ingredient_suppliers
            .get(index)
            .and_then(|s| s.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn batch_code_override(&self, index: usize) -> Option<&str> {
        self.batch_codes
            .get(index)
            .and_then(|s| s.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn sell_by_override(&self, index: usize) -> Option<&str> {
        self.sell_by_dates
            .get(index)
            .and_then(|s| s.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn receiving_override(&self, index: usize) -> Option<&str> {
        self.receiving_dates
            .get(index)
            .and_then(|s| s.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Immutable audit-log row on a schedule item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub changed_by: String,
    pub changes: Vec<FieldChange>,
}

impl ChangeHistoryEntry {
    pub fn new(changed_by: impl Into<String>, changes: Vec<FieldChange>) -> Self {
        Self {
            timestamp: Utc::now(),
            changed_by: changed_by.into(),
            changes,
        }
    }

    /// Entry marking item creation
    pub fn created(changed_by: impl Into<String>) -> Self {
        Self::new(
            changed_by,
            vec![FieldChange {
                field: "created".to_string(),
                old_value: serde_json::Value::Null,
                new_value: serde_json::Value::String("Production scheduled".to_string()),
            }],
        )
    }
}

/// One field diff inside a change-history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old_value: serde_json::Value,
    pub new_value: serde_json::Value,
}

impl FieldChange {
    pub fn new(
        field: impl Into<String>,
        old_value: serde_json::Value,
        new_value: serde_json::Value,
    ) -> Self {
        Self {
            field: field.into(),
            old_value,
            new_value,
        }
    }
}

/// Generate a schedule item identifier: `{date}-{recipe_code}-{millis}`
pub fn generate_item_id(date: NaiveDate, recipe_code: &str, timestamp_millis: i64) -> String {
    format!("{}-{}-{}", date.format("%Y-%m-%d"), recipe_code, timestamp_millis)
}
