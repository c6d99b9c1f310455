//! Name/address filtering of store records.

use crate::services::types::StoreRecord;

/// Return the stores whose name or address contains `pattern`.
///
/// Matching is plain case-sensitive substring containment. An absent or
/// empty pattern keeps every record. Input order is preserved.
pub fn filter_stores(stores: &[StoreRecord], pattern: Option<&str>) -> Vec<StoreRecord> {
    match pattern {
        Some(p) if !p.is_empty() => stores
            .iter()
            .filter(|store| matches(store, p))
            .cloned()
            .collect(),
        _ => stores.to_vec(),
    }
}

fn matches(store: &StoreRecord, pattern: &str) -> bool {
    store.store_name.contains(pattern) || store.stores_address.contains(pattern)
}
