//! Role-based UI permissions.
//!
//! The backend enforces access; these flags only decide which controls the
//! UI offers. Store keepers get read-only catalog access and no destructive
//! document actions.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use crate::net::types::UserRole;

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    pub can_edit_nomenclature: bool,
    pub can_create_production_documents: bool,
    pub can_cancel_documents: bool,
    pub can_adjust_stock: bool,
    pub can_export_reports: bool,
}

impl Permissions {
    /// Permissions for `role`; anonymous users get none.
    #[must_use]
    pub fn for_role(role: Option<UserRole>) -> Self {
        let is_manager = role == Some(UserRole::Manager);
        Self {
            can_edit_nomenclature: is_manager,
            can_create_production_documents: is_manager,
            can_cancel_documents: is_manager,
            can_adjust_stock: is_manager,
            can_export_reports: is_manager,
        }
    }
}
