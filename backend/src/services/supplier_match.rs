//! Supplier matching for ingredient traceability
//!
//! Resolves an ingredient description against the department supplier
//! catalog. Ingredient texts often embed a product code in a trailing
//! parenthetical, e.g. `"FROZEN MDM (25kg)"`; that token is tried as an
//! exact product-code match before falling back to substring matching on
//! the description, then to a single cross-department retry.
//!
//! Matching is deterministic: catalog order breaks ties and nothing here
//! touches the clock or any I/O.

use shared::{Department, SupplierDetail, SupplierRecord};

/// Find the best-matching supplier for an ingredient.
///
/// Returns `None` when nothing matches; a miss is an expected outcome, not
/// an error. The cross-department fallback runs automatically when the
/// in-department search comes up empty, and recurses exactly one level.
pub fn find_supplier(
    ingredient_text: &str,
    department: Department,
    rows: &[SupplierRecord],
    ignore_department: bool,
) -> Option<SupplierDetail> {
    let text = ingredient_text.trim();
    if text.is_empty() {
        return None;
    }

    let (cleaned_name, code) = split_ingredient_text(text);

    let candidates: Vec<&SupplierRecord> = rows
        .iter()
        .filter(|row| ignore_department || row.department == department)
        .collect();

    // Exact product-code match first, catalog order as the tie-break
    if let Some(code) = code {
        if let Some(row) = candidates.iter().find(|row| {
            !row.ingredient_product_code.is_empty()
                && row.ingredient_product_code.eq_ignore_ascii_case(code)
        }) {
            return Some(SupplierDetail::from(*row));
        }
    }

    // Substring match on the cleaned description, in either direction
    let needle = cleaned_name.to_lowercase();
    if !needle.is_empty() {
        if let Some(row) = candidates.iter().find(|row| {
            let description = row.product_description.to_lowercase();
            !description.is_empty()
                && (description.contains(&needle) || needle.contains(&description))
        }) {
            return Some(SupplierDetail::from(*row));
        }
    }

    // One automatic cross-department retry
    if !ignore_department {
        return find_supplier(ingredient_text, department, rows, true);
    }

    None
}

/// Resolve a supplier, degrading misses to the `Unknown` placeholder
pub fn resolve_supplier(
    ingredient_text: &str,
    department: Department,
    rows: &[SupplierRecord],
) -> SupplierDetail {
    find_supplier(ingredient_text, department, rows, false)
        .unwrap_or_else(SupplierDetail::unknown)
}

/// Split `"NAME (CODE)"` into the cleaned name and the trailing
/// parenthesized token, when present.
fn split_ingredient_text(text: &str) -> (&str, Option<&str>) {
    if let Some(stripped) = text.strip_suffix(')') {
        if let Some(open) = stripped.rfind('(') {
            let code = stripped[open + 1..].trim();
            let name = text[..open].trim();
            if !code.is_empty() {
                return (name, Some(code));
            }
            return (name, None);
        }
    }
    (text, None)
}
