use super::*;
use crate::util::storage::MemoryStorage;

fn fresh() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (SessionStore::load(storage.clone()), storage)
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_from_empty_storage_is_unauthenticated() {
    let (store, _) = fresh();
    assert_eq!(store.session(), &Session::default());
    assert!(!store.is_authenticated());
}

#[test]
fn load_rehydrates_persisted_fields() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(IDENTIFIER_KEY, "09120000000").unwrap();
    let store = SessionStore::load(storage);
    assert_eq!(store.token(), Some("abc"));
    assert_eq!(store.identifier(), Some("09120000000"));
}

#[test]
fn load_from_unavailable_storage_falls_back_to_empty() {
    let store = SessionStore::load(MemoryStorage::disabled());
    assert_eq!(store.session(), &Session::default());
}

#[test]
fn load_treats_blank_values_as_absent() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "").unwrap();
    let store = SessionStore::load(storage);
    assert_eq!(store.token(), None);
}

// =============================================================
// set_session
// =============================================================

#[test]
fn token_survives_reload() {
    let (mut store, storage) = fresh();
    store.set_token(Some("abc".to_owned()));

    let reloaded = SessionStore::load(storage);
    assert_eq!(reloaded.token(), Some("abc"));
}

#[test]
fn omitted_identifier_is_preserved() {
    let (mut store, storage) = fresh();
    store.set_session(None, IdentifierUpdate::Set(Some("09120000000".to_owned())));
    assert!(!store.is_authenticated());
    assert_eq!(store.identifier(), Some("09120000000"));

    store.set_session(Some("xyz".to_owned()), IdentifierUpdate::Keep);
    assert_eq!(
        store.session(),
        &Session { token: Some("xyz".to_owned()), identifier: Some("09120000000".to_owned()) }
    );
    assert_eq!(storage.peek(IDENTIFIER_KEY), Some("09120000000".to_owned()));
    assert_eq!(storage.peek(TOKEN_KEY), Some("xyz".to_owned()));
}

#[test]
fn absent_token_removes_persisted_key() {
    let (mut store, storage) = fresh();
    store.set_token(Some("abc".to_owned()));
    store.set_token(None);
    assert_eq!(storage.peek(TOKEN_KEY), None);
}

#[test]
fn explicit_none_identifier_clears_it() {
    let (mut store, storage) = fresh();
    store.set_session(Some("abc".to_owned()), IdentifierUpdate::Set(Some("0912".to_owned())));
    store.set_session(Some("abc".to_owned()), IdentifierUpdate::Set(None));
    assert_eq!(store.identifier(), None);
    assert_eq!(storage.peek(IDENTIFIER_KEY), None);
}

#[test]
fn storage_failure_still_updates_memory() {
    let mut store = SessionStore::load(MemoryStorage::disabled());
    store.set_session(Some("abc".to_owned()), IdentifierUpdate::Set(Some("0912".to_owned())));
    assert_eq!(store.token(), Some("abc"));
    assert_eq!(store.identifier(), Some("0912"));
}

// =============================================================
// clear_session
// =============================================================

#[test]
fn clear_session_empties_memory_and_storage() {
    let (mut store, storage) = fresh();
    store.set_session(Some("abc".to_owned()), IdentifierUpdate::Set(Some("0912".to_owned())));
    store.clear_session();
    assert_eq!(store.session(), &Session::default());
    assert_eq!(storage.peek(TOKEN_KEY), None);
    assert_eq!(storage.peek(IDENTIFIER_KEY), None);
}

#[test]
fn clear_session_is_idempotent() {
    let (mut store, storage) = fresh();
    store.clear_session();
    store.clear_session();
    assert_eq!(store.session(), &Session::default());
    assert_eq!(SessionStore::load(storage).session(), &Session::default());
}
