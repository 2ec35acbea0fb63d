//! Supplier catalog loading
//!
//! Catalogs are CSV files, one per department (`bakery.csv`, `butchery.csv`,
//! `hmr.csv`), in the configured directory. Rows feed the supplier matcher;
//! loaded catalogs live in an injected department cache until invalidated.

use std::path::{Path, PathBuf};

use shared::{Department, SupplierRecord};

use crate::cache::DepartmentCache;
use crate::error::{AppError, AppResult};

/// CSV row shape; the department tag comes from the file name
#[derive(Debug, serde::Deserialize)]
struct CatalogRow {
    supplier_code: String,
    supplier_name: String,
    product_description: String,
    #[serde(default)]
    ingredient_product_code: String,
    #[serde(default)]
    pack_size: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    country_of_origin: String,
}

/// Department supplier catalogs backed by CSV files
#[derive(Clone)]
pub struct SupplierCatalog {
    dir: PathBuf,
    cache: DepartmentCache<Vec<SupplierRecord>>,
}

impl SupplierCatalog {
    pub fn new(dir: impl Into<PathBuf>, cache: DepartmentCache<Vec<SupplierRecord>>) -> Self {
        Self {
            dir: dir.into(),
            cache,
        }
    }

    /// Catalog rows for one department, loading and caching on first use.
    ///
    /// A department without a catalog file resolves to an empty catalog; the
    /// matcher then reports misses, which is the expected degradation.
    pub fn rows(&self, department: Department) -> AppResult<Vec<SupplierRecord>> {
        if let Some(rows) = self.cache.get(department) {
            return Ok(rows);
        }
        let rows = self.load_department(department)?;
        self.cache.set(department, rows.clone());
        Ok(rows)
    }

    /// Rows across every department, in department order
    pub fn all_rows(&self) -> AppResult<Vec<SupplierRecord>> {
        let mut all = Vec::new();
        for &department in Department::all() {
            all.extend(self.rows(department)?);
        }
        Ok(all)
    }

    /// Force a reload of one department's catalog on next access
    pub fn invalidate(&self, department: Department) {
        self.cache.invalidate(department);
    }

    fn load_department(&self, department: Department) -> AppResult<Vec<SupplierRecord>> {
        let path = self.dir.join(format!("{}.csv", department.as_str()));
        if !path.exists() {
            tracing::warn!(
                department = department.as_str(),
                path = %path.display(),
                "no supplier catalog file, using empty catalog"
            );
            return Ok(Vec::new());
        }
        let rows = read_catalog_file(&path, department)
            .map_err(|e| AppError::Catalog(format!("{}: {}", path.display(), e)))?;
        tracing::info!(
            department = department.as_str(),
            rows = rows.len(),
            "loaded supplier catalog"
        );
        Ok(rows)
    }
}

fn read_catalog_file(path: &Path, department: Department) -> Result<Vec<SupplierRecord>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| e.to_string())?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<CatalogRow>() {
        let row = result.map_err(|e| e.to_string())?;
        rows.push(SupplierRecord {
            supplier_code: row.supplier_code,
            supplier_name: row.supplier_name,
            product_description: row.product_description,
            ingredient_product_code: row.ingredient_product_code,
            pack_size: row.pack_size,
            address: row.address,
            country_of_origin: row.country_of_origin,
            department,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BAKERY_CSV: &str = "\
supplier_code,supplier_name,product_description,ingredient_product_code,pack_size,address,country_of_origin
SUP001,Mill Co,FLOUR WHITE 12.5KG,12345,12.5kg,1 Mill Rd,South Africa
SUP002,Sweet Co,SUGAR BROWN,,25kg,2 Cane St,South Africa
";

    fn catalog_with(dir: &Path) -> SupplierCatalog {
        SupplierCatalog::new(dir, DepartmentCache::new())
    }

    #[test]
    fn test_load_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("bakery.csv")).unwrap();
        file.write_all(BAKERY_CSV.as_bytes()).unwrap();

        let catalog = catalog_with(dir.path());
        let rows = catalog.rows(Department::Bakery).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].supplier_name, "Mill Co");
        assert_eq!(rows[0].ingredient_product_code, "12345");
        assert_eq!(rows[0].department, Department::Bakery);
        // Optional column may be empty
        assert!(rows[1].ingredient_product_code.is_empty());

        // Second read is served from the cache even if the file disappears
        drop(dir);
        let cached = catalog.rows(Department::Bakery).unwrap();
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_with(dir.path());
        assert!(catalog.rows(Department::Hmr).unwrap().is_empty());
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bakery.csv");
        std::fs::write(&path, BAKERY_CSV).unwrap();

        let catalog = catalog_with(dir.path());
        assert_eq!(catalog.rows(Department::Bakery).unwrap().len(), 2);

        std::fs::write(
            &path,
            "supplier_code,supplier_name,product_description\nSUP003,New Co,YEAST\n",
        )
        .unwrap();
        catalog.invalidate(Department::Bakery);
        let rows = catalog.rows(Department::Bakery).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].supplier_name, "New Co");
    }
}
