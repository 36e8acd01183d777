//! Unit tests for the EntityCache public API.

use ledgerdesk_core::managers::entity_cache::EntityCache;

#[derive(Debug, Clone, PartialEq)]
struct Invoice {
    number: String,
    total_cents: i64,
}

fn invoice(number: &str, total_cents: i64) -> Invoice {
    Invoice {
        number: number.to_string(),
        total_cents,
    }
}

#[test]
fn test_get_missing_returns_none() {
    let cache: EntityCache<Invoice> = EntityCache::new();
    assert!(cache.get("inv-1").is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_insert_then_get() {
    let mut cache = EntityCache::new();
    cache.insert("inv-1", invoice("INV-1023", 125_00));

    assert_eq!(cache.get("inv-1"), Some(&invoice("INV-1023", 125_00)));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_insert_replaces_cached_value() {
    let mut cache = EntityCache::new();
    cache.insert("inv-1", invoice("INV-1023", 125_00));
    cache.insert("inv-1", invoice("INV-1023", 250_00));

    assert_eq!(cache.get("inv-1").unwrap().total_cents, 250_00);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_invalidate_returns_and_removes() {
    let mut cache = EntityCache::new();
    cache.insert("inv-1", invoice("INV-1023", 125_00));

    let removed = cache.invalidate("inv-1");
    assert_eq!(removed, Some(invoice("INV-1023", 125_00)));
    assert!(cache.get("inv-1").is_none());

    assert_eq!(cache.invalidate("inv-1"), None);
}

#[test]
fn test_clear_empties_cache() {
    let mut cache = EntityCache::new();
    cache.insert("inv-1", invoice("INV-1023", 125_00));
    cache.insert("inv-2", invoice("INV-1024", 90_00));

    cache.clear();

    assert!(cache.is_empty());
}
