//! Lookup of external command-line tools
//!
//! Tools are found on `PATH` with the `which` crate unless the configuration
//! pins an explicit executable (e.g. `pod-path` in `avocado.toml`).

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::AvocadoConfig;

/// CocoaPods executable name
pub const POD_TOOL: &str = "pod";

#[derive(Debug, Clone, Default)]
pub struct ToolLocator {
    overrides: HashMap<String, PathBuf>,
    /// Replaces `PATH` for lookups when set
    search_path: Option<OsString>,
}

impl ToolLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator seeded with the tool paths pinned in the configuration.
    pub fn from_config(config: &AvocadoConfig) -> Self {
        let mut locator = Self::new();
        if let Some(pod_path) = &config.pod_path {
            locator = locator.with_override(POD_TOOL, pod_path);
        }
        locator
    }

    pub fn with_override(mut self, tool: &str, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(tool.to_string(), path.into());
        self
    }

    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Find `tool`, preferring a pinned path when it points at a file.
    ///
    /// A pinned path that does not exist is reported and the regular search
    /// runs instead.
    pub fn locate(&self, tool: &str) -> Option<PathBuf> {
        if let Some(path) = self.overrides.get(tool) {
            if path.is_file() {
                debug!("Using configured {} at {:?}", tool, path);
                return Some(path.clone());
            }
            warn!(
                "Configured path for '{}' is not a file: {}",
                tool,
                path.display()
            );
        }

        let found = match &self.search_path {
            Some(search_path) => which::which_in(tool, Some(search_path), Path::new(".")),
            None => which::which(tool),
        };
        match found {
            Ok(path) => {
                debug!("Found {} at {:?}", tool, path);
                Some(path)
            }
            Err(e) => {
                debug!("{} not found: {}", tool, e);
                None
            }
        }
    }

    pub fn is_installed(&self, tool: &str) -> bool {
        self.locate(tool).is_some()
    }
}
