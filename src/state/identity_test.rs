use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn mock_identity_manager_is_fixed() {
    let me = mock_identity(UserRole::Manager);
    assert_eq!(me.id, "00000000-0000-0000-0000-000000000001");
    assert_eq!(me.login, "иван.петров");
    assert_eq!(me.full_name(), "Петров Иван Иванович");
    assert_eq!(me.role, UserRole::Manager);
}

#[test]
fn mock_identity_store_keeper_is_fixed() {
    let me = mock_identity(UserRole::StoreKeeper);
    assert_eq!(me.id, "00000000-0000-0000-0000-000000000002");
    assert_eq!(me.login, "пётр.сидоров");
    assert_eq!(me.middlename.as_deref(), Some("Сергеевич"));
    assert_eq!(me.role, UserRole::StoreKeeper);
}

#[test]
fn mock_identity_is_deterministic() {
    for role in UserRole::ALL {
        assert_eq!(mock_identity(role), mock_identity(role));
    }
}

#[test]
fn fallback_reads_only_known_tags() {
    let storage = MemoryStorage::new();
    let fallback = LocalFallbackIdentitySource::new(storage.clone());
    assert_eq!(fallback.stored_role(), None);

    storage.set(MOCK_ROLE_STORAGE_KEY, "storeKeeper");
    assert_eq!(fallback.stored_role(), Some(UserRole::StoreKeeper));

    storage.set(MOCK_ROLE_STORAGE_KEY, "admin");
    assert_eq!(fallback.stored_role(), None);
}

#[test]
fn fallback_store_and_clear_role() {
    let storage = MemoryStorage::new();
    let fallback = LocalFallbackIdentitySource::new(storage.clone());
    fallback.store_role(UserRole::Manager);
    assert_eq!(storage.get(MOCK_ROLE_STORAGE_KEY).as_deref(), Some("manager"));
    fallback.clear_role();
    assert_eq!(storage.get(MOCK_ROLE_STORAGE_KEY), None);
}

#[tokio::test]
async fn fallback_resolves_mock_identity() {
    let storage = MemoryStorage::new();
    let fallback = LocalFallbackIdentitySource::new(storage.clone());
    assert_eq!(fallback.resolve().await, Ok(None));

    storage.set(MOCK_ROLE_STORAGE_KEY, "manager");
    assert_eq!(fallback.resolve().await, Ok(Some(mock_identity(UserRole::Manager))));
}
