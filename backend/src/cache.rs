//! Department-keyed reference data cache
//!
//! Recipes, staff lists and supplier catalogs change rarely but are read on
//! every schedule operation. Each loader owns an injected cache instance, so
//! cache lifetime and invalidation stay explicit and testable.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shared::Department;

/// Shared cache of per-department values
#[derive(Clone)]
pub struct DepartmentCache<T: Clone> {
    inner: Arc<RwLock<HashMap<Department, T>>>,
}

impl<T: Clone> DepartmentCache<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn get(&self, department: Department) -> Option<T> {
        self.inner
            .read()
            .expect("department cache lock poisoned")
            .get(&department)
            .cloned()
    }

    pub fn set(&self, department: Department, value: T) {
        self.inner
            .write()
            .expect("department cache lock poisoned")
            .insert(department, value);
    }

    pub fn invalidate(&self, department: Department) {
        self.inner
            .write()
            .expect("department cache lock poisoned")
            .remove(&department);
    }

    pub fn invalidate_all(&self) {
        self.inner
            .write()
            .expect("department cache lock poisoned")
            .clear();
    }
}

impl<T: Clone> Default for DepartmentCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_none_until_set() {
        let cache: DepartmentCache<Vec<String>> = DepartmentCache::new();
        assert!(cache.get(Department::Bakery).is_none());

        cache.set(Department::Bakery, vec!["a".to_string()]);
        assert_eq!(cache.get(Department::Bakery).unwrap().len(), 1);
        assert!(cache.get(Department::Butchery).is_none());
    }

    #[test]
    fn test_invalidate_clears_one_department() {
        let cache: DepartmentCache<i32> = DepartmentCache::new();
        cache.set(Department::Bakery, 1);
        cache.set(Department::Hmr, 2);

        cache.invalidate(Department::Bakery);
        assert!(cache.get(Department::Bakery).is_none());
        assert_eq!(cache.get(Department::Hmr), Some(2));

        cache.invalidate_all();
        assert!(cache.get(Department::Hmr).is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let cache: DepartmentCache<i32> = DepartmentCache::new();
        let clone = cache.clone();
        clone.set(Department::Butchery, 7);
        assert_eq!(cache.get(Department::Butchery), Some(7));
    }
}
