//! INI file option store backed by `configparser`.

use crate::domain::error::ConfigurationError;
use crate::ports::option_store::OptionStore;
use configparser::ini::Ini;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Section and option names are matched case-insensitively.
pub struct IniStore {
    config: Ini,
}

impl IniStore {
    pub fn new() -> Self {
        Self { config: Ini::new() }
    }

    pub fn from_string(content: &str) -> Result<Self, ConfigurationError> {
        let mut store = Self::new();
        store
            .config
            .read(content.to_string())
            .map_err(|reason| ConfigurationError::Parse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(store)
    }

    pub fn sections(&self) -> Vec<String> {
        let mut sections = self.config.sections();
        sections.sort();
        sections
    }
}

impl Default for IniStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionStore for IniStore {
    fn read(&mut self, paths: &[&Path]) -> Result<Vec<PathBuf>, ConfigurationError> {
        let mut read = Vec::with_capacity(paths.len());
        for path in paths {
            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::warn!(
                        path = %path.display(),
                        "skipping missing configuration file"
                    );
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            self.config
                .read_and_append(content)
                .map_err(|reason| ConfigurationError::Parse {
                    file: path.display().to_string(),
                    reason,
                })?;
            tracing::debug!(path = %path.display(), "read configuration file");
            read.push(path.to_path_buf());
        }
        Ok(read)
    }

    fn has_section(&self, section: &str) -> bool {
        self.config
            .get_map_ref()
            .contains_key(&section.to_lowercase())
    }

    fn has_option(&self, section: &str, option: &str) -> bool {
        self.config
            .get_map_ref()
            .get(&section.to_lowercase())
            .is_some_and(|options| options.contains_key(&option.to_lowercase()))
    }

    fn get(&self, section: &str, option: &str) -> Option<String> {
        self.config.get(section, option)
    }
}
