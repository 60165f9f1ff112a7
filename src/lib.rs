//! cfgaccess — typed, defaulted access to INI-style configuration files.
//!
//! Hexagonal architecture: the accessor and its error type in [`domain`],
//! collaborator traits in [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;
