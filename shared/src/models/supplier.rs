//! Supplier catalog models
//!
//! Catalog rows are read-only reference data sourced from per-department CSV
//! files. `SupplierDetail` is the normalized shape handed to audit records:
//! every field is a plain string so serialized documents never carry nulls.

use serde::{Deserialize, Serialize};

use crate::types::Department;

/// Name used when no supplier could be resolved for an ingredient
pub const UNKNOWN_SUPPLIER: &str = "Unknown";

/// One row of a department supplier catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub supplier_code: String,
    pub supplier_name: String,
    pub product_description: String,
    #[serde(default)]
    pub ingredient_product_code: String,
    #[serde(default)]
    pub pack_size: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country_of_origin: String,
    pub department: Department,
}

/// Normalized supplier details attached to an audit line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SupplierDetail {
    pub name: String,
    #[serde(default)]
    pub supplier_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub ean: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pack_size: String,
    #[serde(default)]
    pub country_of_origin: String,
}

impl SupplierDetail {
    /// Placeholder detail for lookup misses; a miss is an expected outcome
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_SUPPLIER.to_string(),
            ..Default::default()
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_SUPPLIER || self.name.is_empty()
    }
}

impl From<&SupplierRecord> for SupplierDetail {
    fn from(row: &SupplierRecord) -> Self {
        Self {
            name: row.supplier_name.clone(),
            supplier_code: row.supplier_code.clone(),
            address: row.address.clone(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            product_code: row.ingredient_product_code.clone(),
            ean: String::new(),
            description: row.product_description.clone(),
            pack_size: row.pack_size.clone(),
            country_of_origin: row.country_of_origin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_placeholder_shape() {
        let detail = SupplierDetail::unknown();
        assert_eq!(detail.name, "Unknown");
        assert!(detail.supplier_code.is_empty());
        assert!(detail.is_unknown());
    }

    #[test]
    fn test_detail_from_record_never_has_nulls() {
        let row = SupplierRecord {
            supplier_code: "SUP001".to_string(),
            supplier_name: "Acme Meats".to_string(),
            product_description: "FROZEN MDM".to_string(),
            ingredient_product_code: "25kg".to_string(),
            pack_size: "25kg".to_string(),
            address: "1 Cold Store Rd".to_string(),
            country_of_origin: "South Africa".to_string(),
            department: Department::Butchery,
        };
        let detail = SupplierDetail::from(&row);
        assert_eq!(detail.name, "Acme Meats");
        assert_eq!(detail.product_code, "25kg");
        // Fields the catalog does not carry default to empty strings
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["email"], "");
        assert_eq!(json["ean"], "");
    }
}
