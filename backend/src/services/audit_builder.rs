//! Audit record derivation for completed production runs
//!
//! Builds the immutable traceability document from a schedule item and its
//! recipe: scales ingredient quantities, resolves suppliers through the
//! catalog matcher, and fills batch codes and dates that were not entered
//! during production.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use shared::{
    generate_audit_uid, AuditRecord, Department, IngredientAuditLine, Recipe, RecipeIngredient,
    ScheduleItem, SupplierDetail, SupplierRecord,
};

use crate::config::AuditConfig;
use crate::services::supplier_match::find_supplier;

/// Builds audit records with configured defaults
#[derive(Clone)]
pub struct AuditBuilder {
    sell_by_days: i64,
    default_quality_score: i32,
}

impl AuditBuilder {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            sell_by_days: config.sell_by_days,
            default_quality_score: config.default_quality_score,
        }
    }

    /// Derive the audit record for a completed item.
    ///
    /// Ingredient scaling always uses `planned_qty`; `actual_qty` only feeds
    /// the recorded actual, defaulting to planned when production finished
    /// without an entry. `now` is passed in so derivation stays clock-free
    /// and reproducible.
    pub fn build(
        &self,
        item: &ScheduleItem,
        recipe: &Recipe,
        department: Department,
        catalog_rows: &[SupplierRecord],
        now: DateTime<Utc>,
    ) -> AuditRecord {
        let millis = now.timestamp_millis();
        let today = now.date_naive();

        let lines = recipe
            .ingredients
            .iter()
            .enumerate()
            .map(|(i, ingredient)| {
                let base = ingredient.base_qty();
                let scaled = scale_quantity(base, item.planned_qty);

                let mut supplier =
                    find_supplier(&ingredient.description, department, catalog_rows, false)
                        .unwrap_or_else(|| embedded_supplier(ingredient));
                if let Some(override_name) = item.supplier_override(i) {
                    supplier.name = override_name.to_string();
                }

                let batch_code = item
                    .batch_code_override(i)
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        format!(
                            "BATCH-{}-{}-{:06}",
                            item.recipe_code,
                            i + 1,
                            millis.rem_euclid(1_000_000)
                        )
                    });

                let sell_by_date = item
                    .sell_by_override(i)
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        (today + Duration::days(self.sell_by_days))
                            .format("%Y-%m-%d")
                            .to_string()
                    });

                let receiving_date = item
                    .receiving_override(i)
                    .map(str::to_string)
                    .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

                let country_of_origin = if supplier.country_of_origin.is_empty() {
                    department.default_country().to_string()
                } else {
                    supplier.country_of_origin.clone()
                };

                IngredientAuditLine {
                    ingredient: format!(
                        "{} ({} from base: {})",
                        ingredient.description, scaled, base
                    ),
                    supplier_name: supplier.name.clone(),
                    supplier_address: supplier.address.clone(),
                    supplier,
                    batch_code,
                    sell_by_date,
                    receiving_date,
                    country_of_origin,
                }
            })
            .collect();

        AuditRecord {
            uid: generate_audit_uid(item.date, &item.recipe_code, millis),
            department,
            recipe_code: item.recipe_code.clone(),
            recipe_description: recipe.description.clone(),
            production_date: item.date,
            handler_name: item.handler_name.clone(),
            manager_name: item.manager_name.clone(),
            lines,
            planned_qty: item.planned_qty,
            actual_qty: item.actual_qty.unwrap_or(item.planned_qty),
            quality_score: item.quality_score.unwrap_or(self.default_quality_score),
            notes: item.notes.clone(),
            deviations: if item.deviations.is_empty() {
                vec!["none".to_string()]
            } else {
                item.deviations.clone()
            },
            confirmation_timestamp: now,
        }
    }
}

/// Supplier detail from the recipe's own supplier fields, used when the
/// catalog has no match; falls through to the placeholder
fn embedded_supplier(ingredient: &RecipeIngredient) -> SupplierDetail {
    match ingredient.supplier_name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => SupplierDetail {
            name: name.to_string(),
            supplier_code: ingredient.supplier_code.clone().unwrap_or_default(),
            address: ingredient.supplier_address.clone().unwrap_or_default(),
            country_of_origin: ingredient.country_of_origin.clone().unwrap_or_default(),
            ..Default::default()
        },
        None => SupplierDetail::unknown(),
    }
}

/// Scale one ingredient's base quantity to a production quantity,
/// rendered with exactly three decimals
pub fn scale_quantity(base: Decimal, planned_qty: Decimal) -> String {
    let mut scaled = base * planned_qty;
    scaled.rescale(3);
    scaled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_scale_quantity_three_decimals() {
        assert_eq!(scale_quantity(dec("0.5"), dec("10")), "5.000");
        assert_eq!(scale_quantity(dec("0.2"), dec("20")), "4.000");
        assert_eq!(scale_quantity(dec("0"), dec("20")), "0.000");
        assert_eq!(scale_quantity(dec("0.333"), dec("3")), "0.999");
    }
}
