pub mod dashboard;
pub mod header;
pub mod login;
pub mod section;
