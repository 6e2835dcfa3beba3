use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let storage = MemoryStorage::new();
    storage.set("auth_token", "abc").unwrap();
    assert_eq!(storage.get("auth_token").unwrap(), Some("abc".to_owned()));
    storage.remove("auth_token").unwrap();
    assert_eq!(storage.get("auth_token").unwrap(), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let first = MemoryStorage::new();
    let second = first.clone();
    first.set("k", "v").unwrap();
    assert_eq!(second.get("k").unwrap(), Some("v".to_owned()));
}

#[test]
fn disabled_memory_storage_fails_every_call() {
    let storage = MemoryStorage::disabled();
    assert_eq!(storage.get("k"), Err(StorageError::Unavailable));
    assert_eq!(storage.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove("k"), Err(StorageError::Unavailable));
    assert_eq!(storage.peek("k"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_outside_the_browser() {
    assert_eq!(BrowserStorage.get("k"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.remove("k"), Err(StorageError::Unavailable));
}
