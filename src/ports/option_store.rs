//! Section/option store port.
//!
//! The store owns all section and option data. Implementations decide the
//! file syntax (quoting, comments, continuation lines); the accessor only
//! ever sees raw strings.

use crate::domain::error::ConfigurationError;
use std::path::{Path, PathBuf};

pub trait OptionStore {
    /// Read every path in order, later files overriding earlier ones.
    ///
    /// Paths that cannot be found are skipped. Returns the paths that were
    /// actually read.
    fn read(&mut self, paths: &[&Path]) -> Result<Vec<PathBuf>, ConfigurationError>;

    fn has_section(&self, section: &str) -> bool;

    fn has_option(&self, section: &str, option: &str) -> bool;

    /// Raw value of an option. A present option declared without a value
    /// may yield `None`.
    fn get(&self, section: &str, option: &str) -> Option<String>;
}
