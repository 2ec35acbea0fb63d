//! Completed-production audit (traceability) models
//!
//! An audit record is created exactly once, when a schedule item reaches
//! `completed`, and is immutable afterwards except for the supplier backfill
//! maintenance routine. Ingredient data lives in one sequence of lines with
//! named fields; every line is index-aligned with the source recipe's
//! ingredient list by construction.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::supplier::SupplierDetail;
use crate::types::Department;

/// Immutable traceability document for one completed production run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// `{date}-{recipe_code}-{millis}`
    pub uid: String,
    pub department: Department,
    pub recipe_code: String,
    pub recipe_description: String,
    pub production_date: NaiveDate,
    pub handler_name: String,
    pub manager_name: String,
    /// One line per recipe ingredient, same order as the recipe
    pub lines: Vec<IngredientAuditLine>,
    pub planned_qty: Decimal,
    pub actual_qty: Decimal,
    pub quality_score: i32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub deviations: Vec<String>,
    pub confirmation_timestamp: DateTime<Utc>,
}

/// Traceability data for one ingredient of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientAuditLine {
    /// Display string carrying the scaled quantity,
    /// e.g. `"FLOUR WHITE (5.000 from base: 0.5)"`
    pub ingredient: String,
    pub supplier_name: String,
    pub supplier: SupplierDetail,
    pub supplier_address: String,
    pub batch_code: String,
    /// ISO dates
    pub sell_by_date: String,
    pub receiving_date: String,
    pub country_of_origin: String,
}

impl AuditRecord {
    /// Lines whose supplier is still the lookup-miss placeholder
    pub fn unresolved_line_indices(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.supplier.is_unknown())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Generate an audit record identifier: `{date}-{recipe_code}-{millis}`
pub fn generate_audit_uid(date: NaiveDate, recipe_code: &str, timestamp_millis: i64) -> String {
    format!("{}-{}-{}", date.format("%Y-%m-%d"), recipe_code, timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_uid_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            generate_audit_uid(date, "R101", 1710500000123),
            "2024-03-15-R101-1710500000123"
        );
    }

    #[test]
    fn test_unresolved_line_indices() {
        let resolved = IngredientAuditLine {
            ingredient: "FLOUR".to_string(),
            supplier_name: "Mill Co".to_string(),
            supplier: SupplierDetail {
                name: "Mill Co".to_string(),
                ..Default::default()
            },
            supplier_address: String::new(),
            batch_code: "BATCH-R101-1-000001".to_string(),
            sell_by_date: "2024-03-22".to_string(),
            receiving_date: "2024-03-15".to_string(),
            country_of_origin: "South Africa".to_string(),
        };
        let unresolved = IngredientAuditLine {
            supplier: SupplierDetail::unknown(),
            supplier_name: "Unknown".to_string(),
            ..resolved.clone()
        };
        let record = AuditRecord {
            uid: "2024-03-15-R101-1".to_string(),
            department: Department::Bakery,
            recipe_code: "R101".to_string(),
            recipe_description: "White Bread".to_string(),
            production_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            handler_name: "Alice".to_string(),
            manager_name: "Bob".to_string(),
            lines: vec![resolved, unresolved],
            planned_qty: rust_decimal::Decimal::from(10),
            actual_qty: rust_decimal::Decimal::from(10),
            quality_score: 3,
            notes: String::new(),
            deviations: vec!["none".to_string()],
            confirmation_timestamp: Utc::now(),
        };
        assert_eq!(record.unresolved_line_indices(), vec![1]);
    }
}
