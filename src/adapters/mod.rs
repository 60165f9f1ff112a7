//! Concrete adapter implementations for ports.

pub mod ini_store;
pub mod local_file_system;
