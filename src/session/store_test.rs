use super::*;
use crate::session::repository::MemoryRepository;

fn store_with(entries: &[(&str, &str)]) -> SessionStore<MemoryRepository> {
    let repo = MemoryRepository::default();
    for (key, value) in entries {
        repo.set(key, value).unwrap();
    }
    SessionStore::new(repo)
}

// =============================================================
// Token and access level reads
// =============================================================

#[test]
fn token_absent_by_default() {
    let store = store_with(&[]);
    assert_eq!(store.token().unwrap(), None);
}

#[test]
fn token_reads_persisted_value() {
    let store = store_with(&[(TOKEN_KEY, "abc123")]);
    assert_eq!(store.token().unwrap(), Some("abc123".to_owned()));
}

#[test]
fn access_level_reads_persisted_value() {
    let store = store_with(&[(ACCESS_LEVEL_KEY, "2")]);
    assert_eq!(store.access_level().unwrap(), Some("2".to_owned()));
}

#[test]
fn reads_reflect_latest_persisted_value() {
    // No caching: a write between reads is visible immediately.
    let repo = MemoryRepository::default();
    let store = SessionStore::new(repo.clone());
    assert_eq!(store.token().unwrap(), None);
    repo.set(TOKEN_KEY, "fresh").unwrap();
    assert_eq!(store.token().unwrap(), Some("fresh".to_owned()));
}

// =============================================================
// Header bundle
// =============================================================

#[test]
fn auth_headers_carry_exactly_two_pairs() {
    let store = store_with(&[(TOKEN_KEY, "abc123")]);
    let headers = store.auth_headers().unwrap();
    let pairs = headers.pairs();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "Content-Type");
    assert_eq!(pairs[1].0, "Authorization");
}

#[test]
fn auth_headers_use_json_content_type() {
    let store = store_with(&[(TOKEN_KEY, "abc123")]);
    assert_eq!(store.auth_headers().unwrap().content_type, "application/json");
}

#[test]
fn authorization_is_bearer_plus_token() {
    let store = store_with(&[(TOKEN_KEY, "abc123")]);
    assert_eq!(store.auth_headers().unwrap().authorization, "Bearer abc123");
}

#[test]
fn authorization_always_has_bearer_prefix() {
    // Even with no token the value keeps the prefix; the degenerate empty
    // suffix is documented and must not be treated as authenticated.
    let store = store_with(&[]);
    let headers = store.auth_headers().unwrap();
    assert!(headers.authorization.starts_with("Bearer "));
    assert_eq!(headers.authorization, "Bearer ");
}

#[test]
fn auth_headers_recomputed_per_call() {
    let repo = MemoryRepository::default();
    let store = SessionStore::new(repo.clone());
    repo.set(TOKEN_KEY, "first").unwrap();
    assert_eq!(store.auth_headers().unwrap().authorization, "Bearer first");
    repo.set(TOKEN_KEY, "second").unwrap();
    assert_eq!(store.auth_headers().unwrap().authorization, "Bearer second");
}
