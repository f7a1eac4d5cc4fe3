use super::*;

// =============================================================
// MemoryRepository basics
// =============================================================

#[test]
fn get_unset_key_is_none() {
    let repo = MemoryRepository::default();
    assert_eq!(repo.get(TOKEN_KEY).ok(), Some(None));
}

#[test]
fn set_then_get_round_trips() {
    let repo = MemoryRepository::default();
    repo.set(TOKEN_KEY, "abc123").unwrap();
    assert_eq!(repo.get(TOKEN_KEY).unwrap(), Some("abc123".to_owned()));
}

#[test]
fn set_replaces_previous_value() {
    let repo = MemoryRepository::default();
    repo.set(ACCESS_LEVEL_KEY, "1").unwrap();
    repo.set(ACCESS_LEVEL_KEY, "2").unwrap();
    assert_eq!(repo.get(ACCESS_LEVEL_KEY).unwrap(), Some("2".to_owned()));
}

#[test]
fn clear_removes_all_values() {
    let repo = MemoryRepository::default();
    repo.set(TOKEN_KEY, "abc123").unwrap();
    repo.set(ACCESS_LEVEL_KEY, "1").unwrap();
    repo.clear().unwrap();
    assert_eq!(repo.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(repo.get(ACCESS_LEVEL_KEY).unwrap(), None);
}

// =============================================================
// Shared backing map
// =============================================================

#[test]
fn clones_observe_external_writes() {
    // The login flow writes through one handle; readers see it on the next
    // get with no extra synchronization.
    let writer = MemoryRepository::default();
    let reader = writer.clone();
    writer.set(TOKEN_KEY, "abc123").unwrap();
    assert_eq!(reader.get(TOKEN_KEY).unwrap(), Some("abc123".to_owned()));
}

#[test]
fn clones_observe_external_clear() {
    let writer = MemoryRepository::default();
    let reader = writer.clone();
    writer.set(TOKEN_KEY, "abc123").unwrap();
    writer.clear().unwrap();
    assert_eq!(reader.get(TOKEN_KEY).unwrap(), None);
}
