//! Resolved directory layout of a host project
//!
//! A [`ProjectLayout`] is built once from the project root (and optionally the
//! config file) and then handed to every component that needs a path, so that
//! several projects can be inspected side by side within one process.

use std::path::{Path, PathBuf};

/// Native iOS project directory, relative to the project root
pub const DEFAULT_IOS_DIR: &str = "ios";

/// Directory holding installed plugin packages, relative to the project root
pub const DEFAULT_PLUGINS_DIR: &str = "node_modules";

/// The host project's package manifest
pub const HOST_MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    ios_dir: PathBuf,
    plugins_dir: PathBuf,
}

impl ProjectLayout {
    /// Layout with the default `ios/` and `node_modules/` directories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        ProjectLayout {
            ios_dir: root.join(DEFAULT_IOS_DIR),
            plugins_dir: root.join(DEFAULT_PLUGINS_DIR),
            root,
        }
    }

    /// Override the iOS directory. Relative paths are resolved against the
    /// project root, absolute paths are kept as given.
    pub fn with_ios_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.ios_dir = self.root.join(dir);
        self
    }

    pub fn with_plugins_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.plugins_dir = self.root.join(dir);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ios_dir(&self) -> &Path {
        &self.ios_dir
    }

    pub fn plugins_dir(&self) -> &Path {
        &self.plugins_dir
    }

    pub fn host_manifest(&self) -> PathBuf {
        self.root.join(HOST_MANIFEST_FILE)
    }
}
