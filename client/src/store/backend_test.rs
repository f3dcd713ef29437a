use super::*;

// =============================================================================
// MemoryStorage
// =============================================================================

#[test]
fn memory_get_absent_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("missing"), None);
}

#[test]
fn memory_set_then_get() {
    let storage = MemoryStorage::new();
    assert!(storage.set("k", "v"));
    assert_eq!(storage.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("k", "old");
    storage.set("k", "new");
    assert_eq!(storage.get("k").as_deref(), Some("new"));
}

#[test]
fn memory_remove_clears_key() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
    assert!(!storage.contains("k"));
}

#[test]
fn memory_remove_absent_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("never-set");
    assert_eq!(storage.get("never-set"), None);
}

// =============================================================================
// BrowserStorage (native build — always absent)
// =============================================================================

#[test]
fn browser_storage_is_inert_off_wasm() {
    let storage = BrowserStorage;
    assert!(!storage.set("k", "v"));
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
}
