//! Collaborator traits the accessor is injected with.

pub mod file_system;
pub mod option_store;
