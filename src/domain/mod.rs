//! Core accessor logic and its error type.

pub mod accessor;
pub mod error;
