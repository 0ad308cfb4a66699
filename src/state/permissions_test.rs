use super::*;

#[test]
fn manager_has_every_permission() {
    let perms = Permissions::for_role(Some(UserRole::Manager));
    assert!(perms.can_edit_nomenclature);
    assert!(perms.can_create_production_documents);
    assert!(perms.can_cancel_documents);
    assert!(perms.can_adjust_stock);
    assert!(perms.can_export_reports);
}

#[test]
fn store_keeper_has_none() {
    assert_eq!(Permissions::for_role(Some(UserRole::StoreKeeper)), Permissions::default());
}

#[test]
fn anonymous_has_none() {
    assert_eq!(Permissions::for_role(None), Permissions::default());
}
