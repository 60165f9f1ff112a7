//! Typed, defaulted reads over an injected option store.
//!
//! Every getter goes back to the store on each call; nothing is cached, so
//! repeated reads against an unchanged store always agree.
//!
//! Default resolution differs between the getters:
//!
//! - [`ConfigurationAccessor::get_option`] and the int/boolean getters fall
//!   back to the default only when the option is absent.
//! - The list and set getters also fall back when the option is present but
//!   empty, so `hosts =` behaves like a missing `hosts`.

use crate::adapters::ini_store::IniStore;
use crate::adapters::local_file_system::LocalFileSystem;
use crate::domain::error::ConfigurationError;
use crate::ports::file_system::FileSystem;
use crate::ports::option_store::OptionStore;
use std::collections::BTreeSet;
use std::path::Path;

/// Read-only view over a loaded configuration.
///
/// The accessor holds no interior mutability. Sharing it across threads is
/// sound only while nothing writes to the underlying store.
pub struct ConfigurationAccessor<S> {
    store: S,
}

impl ConfigurationAccessor<IniStore> {
    /// Load an INI file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        Self::load_with(IniStore::new(), &LocalFileSystem, path)
    }
}

impl<S: OptionStore> ConfigurationAccessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fails with [`ConfigurationError::MissingFile`] without touching the
    /// store when `path` does not exist; otherwise reads exactly `[path]`.
    pub fn load_with<P: AsRef<Path>>(
        mut store: S,
        fs: &dyn FileSystem,
        path: P,
    ) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        if !fs.exists(path) {
            tracing::warn!(path = %path.display(), "configuration file does not exist");
            return Err(ConfigurationError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        store.read(&[path])?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw value of `[section] option`, or `default` when either is missing.
    pub fn get_option(&self, section: &str, option: &str, default: &str) -> String {
        match self.raw(section, option) {
            Some(value) => value,
            None => {
                tracing::debug!(section, option, default, "option absent, using default");
                default.to_string()
            }
        }
    }

    /// A present value that is not a base-10 integer is an error, not a
    /// reason to fall back to `default`.
    pub fn get_option_as_int(
        &self,
        section: &str,
        option: &str,
        default: i64,
    ) -> Result<i64, ConfigurationError> {
        let Some(value) = self.raw(section, option) else {
            return Ok(default);
        };
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigurationError::InvalidInteger {
                section: section.to_string(),
                option: option.to_string(),
                value,
            })
    }

    /// Comma-separated items, each trimmed, in file order with duplicates
    /// kept. An absent or empty option yields `default` unchanged.
    pub fn get_option_as_list(
        &self,
        section: &str,
        option: &str,
        default: Vec<String>,
    ) -> Vec<String> {
        self.list_items(section, option).unwrap_or(default)
    }

    /// Same items as [`Self::get_option_as_list`], deduplicated. An absent or
    /// empty option yields `default` unchanged.
    pub fn get_option_as_set(
        &self,
        section: &str,
        option: &str,
        default: BTreeSet<String>,
    ) -> BTreeSet<String> {
        match self.list_items(section, option) {
            Some(items) => items.into_iter().collect(),
            None => default,
        }
    }

    /// `yes` and `no` in any letter case. An absent or empty option yields
    /// `default`; anything else is an error.
    pub fn get_option_as_yes_or_no_boolean(
        &self,
        section: &str,
        option: &str,
        default: bool,
    ) -> Result<bool, ConfigurationError> {
        let value = match self.raw(section, option) {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(default),
        };
        match value.to_lowercase().as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            _ => Err(ConfigurationError::InvalidYesNo {
                section: section.to_string(),
                option: option.to_string(),
                value,
            }),
        }
    }

    fn raw(&self, section: &str, option: &str) -> Option<String> {
        if self.store.has_section(section) && self.store.has_option(section, option) {
            Some(self.store.get(section, option).unwrap_or_default())
        } else {
            None
        }
    }

    fn list_items(&self, section: &str, option: &str) -> Option<Vec<String>> {
        let value = self.get_option(section, option, "");
        if value.is_empty() {
            return None;
        }
        Some(split_list(&value))
    }
}

/// Splits a comma-separated value into trimmed items, keeping order,
/// duplicates and empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}
