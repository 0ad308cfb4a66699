//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `dashboard`, `permissions`) so pages
//! depend only on the small models they use.

pub mod dashboard;
pub mod identity;
pub mod permissions;
pub mod session;
