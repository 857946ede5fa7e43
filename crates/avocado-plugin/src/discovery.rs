//! Plugin discovery
//!
//! Walks the dependencies declared in the host project's `package.json` and
//! keeps every installed package that carries an `avocado` section.

use avocado_config::ProjectLayout;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::PluginError;
use crate::types::{PluginDescriptor, PluginManifest};

const PACKAGE_JSON: &str = "package.json";

/// The subset of `package.json` discovery cares about
#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
    avocado: Option<PluginManifest>,
}

/// Discovers avocado plugins installed in a host project
pub struct PluginDiscoverer<'a> {
    layout: &'a ProjectLayout,
}

impl<'a> PluginDiscoverer<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        debug!("Initializing plugin discovery for: {:?}", layout.root());
        PluginDiscoverer { layout }
    }

    /// Discover all plugins among the host project's dependencies.
    ///
    /// Dependencies are visited in name order. A dependency that is not
    /// installed, or whose `package.json` is unreadable, is skipped; only a
    /// missing or malformed host `package.json` fails the whole run.
    pub fn discover(&self) -> Result<Vec<PluginDescriptor>, PluginError> {
        let host_path = self.layout.host_manifest();
        let content = match fs::read(&host_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PluginError::HostManifestNotFound(host_path));
            }
            Err(e) => return Err(e.into()),
        };
        let host: PackageJson = serde_json::from_slice(&content)?;

        let names: BTreeSet<&String> = host
            .dependencies
            .keys()
            .chain(host.dev_dependencies.keys())
            .collect();
        debug!("Checking {} dependencies for avocado plugins", names.len());

        let mut plugins = Vec::new();
        for name in names {
            let package_root = self.layout.plugins_dir().join(name);
            match read_descriptor(&package_root) {
                Ok(Some(plugin)) => {
                    debug!("Discovered plugin: {}", plugin.name);
                    plugins.push(plugin);
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping dependency '{}': {}", name, e),
            }
        }

        info!("Found {} avocado plugins", plugins.len());
        Ok(plugins)
    }
}

/// Read the descriptor of the package rooted at `package_root`.
///
/// Returns `Ok(None)` when the package is not installed or declares no
/// `avocado` section.
pub fn read_descriptor(package_root: &Path) -> Result<Option<PluginDescriptor>, PluginError> {
    let manifest_path = package_root.join(PACKAGE_JSON);
    let content = match fs::read(&manifest_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Package not installed: {:?}", package_root);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let package: PackageJson = serde_json::from_slice(&content)?;

    let Some(manifest) = package.avocado else {
        return Ok(None);
    };

    // Unnamed packages fall back to their directory name
    let name = package.name.unwrap_or_else(|| {
        package_root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    });

    let mut descriptor = PluginDescriptor::new(name, package_root, manifest);
    if let Some(version) = package.version {
        descriptor = descriptor.with_version(version);
    }
    Ok(Some(descriptor))
}
