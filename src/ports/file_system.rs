//! Filesystem existence port.

use std::path::Path;

pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
}
