//! Recipe reference data
//!
//! Recipes are read-only to the production core; they come from the
//! department recipe store and drive ingredient scaling during audit
//! derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A department recipe definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub product_code: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub description: String,
    /// Base quantity per 1 unit of recipe; missing values scale as zero
    #[serde(default)]
    pub recipe_use: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
}

impl RecipeIngredient {
    /// Base quantity, zero when absent
    pub fn base_qty(&self) -> Decimal {
        self.recipe_use.unwrap_or(Decimal::ZERO)
    }
}
