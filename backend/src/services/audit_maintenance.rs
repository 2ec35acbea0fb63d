//! Audit record maintenance
//!
//! The one sanctioned mutation of stored audit records: re-resolving lines
//! whose supplier is still the lookup-miss placeholder once catalog data
//! improves. The upsert is idempotent per line; re-running after a full
//! resolve changes nothing.

use std::sync::Arc;

use chrono::Utc;

use shared::{AuditRecord, Department};

use crate::error::AppResult;
use crate::events::{DashboardEvent, EventBus};
use crate::services::supplier_match::find_supplier;
use crate::services::supplier_catalog::SupplierCatalog;
use crate::store::DocumentStore;

/// Maintenance operations over the audit store
#[derive(Clone)]
pub struct AuditMaintenance {
    store: Arc<dyn DocumentStore>,
    catalog: SupplierCatalog,
    events: EventBus,
}

impl AuditMaintenance {
    pub fn new(store: Arc<dyn DocumentStore>, catalog: SupplierCatalog, events: EventBus) -> Self {
        Self {
            store,
            catalog,
            events,
        }
    }

    /// List a department's audit records
    pub async fn list_audits(&self, department: Department) -> AppResult<Vec<AuditRecord>> {
        Ok(self.store.fetch_audits(department).await?)
    }

    /// Administrative audit deletion, tied to schedule deletion
    pub async fn delete_audit(&self, department: Department, audit_uid: &str) -> AppResult<()> {
        self.store.delete_audit(audit_uid).await?;
        self.events.publish(DashboardEvent::DataUpdated {
            department,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Re-resolve placeholder suppliers across a department's audits.
    ///
    /// Returns the number of audit records that changed. Only changed
    /// records are written back.
    pub async fn backfill_suppliers(&self, department: Department) -> AppResult<usize> {
        let catalog_rows = self.catalog.all_rows()?;
        let audits = self.store.fetch_audits(department).await?;

        let mut updated = 0;
        for mut audit in audits {
            let mut changed = false;
            for line in &mut audit.lines {
                if !line.supplier.is_unknown() {
                    continue;
                }
                let ingredient = strip_scaling_suffix(&line.ingredient);
                let Some(supplier) =
                    find_supplier(ingredient, audit.department, &catalog_rows, false)
                else {
                    continue;
                };
                line.supplier_name = supplier.name.clone();
                line.supplier_address = supplier.address.clone();
                if line.country_of_origin.is_empty() {
                    line.country_of_origin = supplier.country_of_origin.clone();
                }
                line.supplier = supplier;
                changed = true;
            }
            if changed {
                tracing::info!(audit_uid = %audit.uid, "backfilled supplier details");
                self.store.save_audit(audit).await?;
                updated += 1;
            }
        }

        if updated > 0 {
            self.events.publish(DashboardEvent::DataUpdated {
                department,
                timestamp: Utc::now(),
            });
        }
        Ok(updated)
    }
}

/// Strip the `" ({scaled} from base: {base})"` suffix an audit line carries,
/// leaving the original ingredient description for matching
fn strip_scaling_suffix(ingredient: &str) -> &str {
    if let Some(pos) = ingredient.rfind(" (") {
        if ingredient[pos..].contains("from base:") {
            return &ingredient[..pos];
        }
    }
    ingredient
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scaling_suffix() {
        assert_eq!(
            strip_scaling_suffix("FLOUR WHITE (5.000 from base: 0.5)"),
            "FLOUR WHITE"
        );
        // Embedded product-code parentheticals survive
        assert_eq!(
            strip_scaling_suffix("FROZEN MDM (25kg) (4.000 from base: 0.2)"),
            "FROZEN MDM (25kg)"
        );
        assert_eq!(strip_scaling_suffix("PLAIN NAME"), "PLAIN NAME");
    }
}
