//! Plugin descriptor types
//!
//! The manifest mirrors the `avocado` section of a plugin's `package.json`:
//!
//! ```json
//! { "avocado": { "ios": { "src": "ios/Plugin" }, "android": { "src": "android" } } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Native source declaration for one platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformManifest {
    /// Source directory, relative to the plugin root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl PlatformManifest {
    pub fn with_src(src: impl Into<String>) -> Self {
        PlatformManifest {
            src: Some(src.into()),
        }
    }

    /// The declared source directory, or `None` when it is missing or blank.
    /// A non-blank value is returned as written.
    pub fn source_dir(&self) -> Option<&str> {
        self.src.as_deref().filter(|src| !src.trim().is_empty())
    }
}

/// Per-platform support declared by a plugin. An absent platform section
/// means the plugin does not target that platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<PlatformManifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<PlatformManifest>,
}

/// An installed plugin package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Package name (e.g. "@acme/camera"), unique within a project
    pub name: String,
    pub version: String,
    /// Root directory of the installed package
    pub root_path: PathBuf,
    pub manifest: PluginManifest,
}

impl PluginDescriptor {
    pub fn new(
        name: impl Into<String>,
        root_path: impl Into<PathBuf>,
        manifest: PluginManifest,
    ) -> Self {
        PluginDescriptor {
            name: name.into(),
            version: "0.0.0".to_string(),
            root_path: root_path.into(),
            manifest,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
