//! Top-level route pages.

pub mod dashboard;
pub mod login;
