//! Reference data loading with explicit per-department caches
//!
//! Recipes and staff lists come from the document store and rarely change
//! within a session; the caches are injected so their lifetime is owned by
//! the composition root, not by module globals.

use std::sync::Arc;

use shared::{Department, Recipe, Staff};

use crate::cache::DepartmentCache;
use crate::error::AppResult;
use crate::store::DocumentStore;

/// Cached loader for department recipes and staff
#[derive(Clone)]
pub struct ReferenceData {
    store: Arc<dyn DocumentStore>,
    recipes: DepartmentCache<Vec<Recipe>>,
    handlers: DepartmentCache<Vec<Staff>>,
}

impl ReferenceData {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        recipes: DepartmentCache<Vec<Recipe>>,
        handlers: DepartmentCache<Vec<Staff>>,
    ) -> Self {
        Self {
            store,
            recipes,
            handlers,
        }
    }

    pub async fn recipes(&self, department: Department) -> AppResult<Vec<Recipe>> {
        if let Some(recipes) = self.recipes.get(department) {
            return Ok(recipes);
        }
        let recipes = self.store.fetch_recipes(department).await?;
        self.recipes.set(department, recipes.clone());
        Ok(recipes)
    }

    /// Look up a recipe by product code within a department
    pub async fn recipe_by_code(
        &self,
        department: Department,
        recipe_code: &str,
    ) -> AppResult<Option<Recipe>> {
        let recipes = self.recipes(department).await?;
        Ok(recipes.into_iter().find(|r| r.product_code == recipe_code))
    }

    pub async fn handlers(&self, department: Department) -> AppResult<Vec<Staff>> {
        if let Some(handlers) = self.handlers.get(department) {
            return Ok(handlers);
        }
        let handlers = self.store.fetch_handlers(department).await?;
        self.handlers.set(department, handlers.clone());
        Ok(handlers)
    }

    /// Drop cached reference data for a department
    pub fn invalidate(&self, department: Department) {
        self.recipes.invalidate(department);
        self.handlers.invalidate(department);
    }
}
