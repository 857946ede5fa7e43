//! iOS plugin resolution
//!
//! For every plugin descriptor the resolver answers three questions: does the
//! plugin declare iOS support, where do its iOS sources live, and should those
//! sources be integrated as plain code or as a CocoaPods pod (signalled by a
//! `*.podspec` file in the source directory).
//!
//! Plugins are independent of each other, so [`resolve_all`] fans out over
//! rayon's thread pool and gathers the results in input order.

use avocado_plugin::PluginDescriptor;
use rayon::prelude::*;
use serde::Serialize;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::IosError;
use crate::listing;

/// File suffix of a CocoaPods package spec
pub const PODSPEC_SUFFIX: &str = ".podspec";

/// How a plugin's iOS sources are integrated into the host project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IosPluginKind {
    /// Native sources copied/linked into the project
    Code,
    /// A pod registered with CocoaPods
    Cocoapods,
}

/// A plugin's contribution to the iOS target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IosContribution {
    /// Plugin name, or the pod name when a podspec is present
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IosPluginKind,
    /// iOS source directory of the plugin
    pub path: PathBuf,
}

/// A resolved plugin together with its iOS contribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IosPlugin<'a> {
    pub plugin: &'a PluginDescriptor,
    pub ios: IosContribution,
}

/// Join a declared source directory onto the plugin root. A leading `/` (or
/// drive prefix) in `src` does not escape the root: `"/ios"` means `<root>/ios`.
fn source_path(root: &Path, src: &str) -> PathBuf {
    let relative: PathBuf = Path::new(src)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    root.join(relative)
}

/// Resolve a single plugin, reporting why it does not resolve.
///
/// # Returns
/// * `Ok(None)` - the plugin declares no iOS support
/// * `Ok(Some(contribution))` - the plugin contributes iOS code
/// * `Err(IosError)` - an iOS section is declared but unusable
pub fn inspect(plugin: &PluginDescriptor) -> Result<Option<IosContribution>, IosError> {
    let Some(ios) = &plugin.manifest.ios else {
        return Ok(None);
    };
    let Some(src) = ios.source_dir() else {
        return Err(IosError::MissingSource {
            plugin: plugin.name.clone(),
        });
    };

    let path = source_path(&plugin.root_path, src);
    let entries = listing::sorted_entry_names(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            IosError::SourceNotFound {
                plugin: plugin.name.clone(),
                path: path.clone(),
            }
        } else {
            IosError::Unreadable {
                plugin: plugin.name.clone(),
                path: path.clone(),
                source: e,
            }
        }
    })?;

    let mut contribution = IosContribution {
        name: plugin.name.clone(),
        kind: IosPluginKind::Code,
        path,
    };

    if let Some(podspec) = listing::first_with_suffix(&entries, PODSPEC_SUFFIX) {
        if listing::count_with_suffix(&entries, PODSPEC_SUFFIX) > 1 {
            debug!(
                "Plugin '{}' ships several podspecs, using {:?}",
                plugin.name, podspec
            );
        }
        contribution.kind = IosPluginKind::Cocoapods;
        // Pod name is everything before the first dot: "MyLib.podspec" -> "MyLib"
        let podspec = podspec.to_string_lossy();
        contribution.name = podspec.split('.').next().unwrap_or(&podspec).to_string();
    }

    Ok(Some(contribution))
}

/// Resolve a single plugin. A plugin whose iOS declaration is missing,
/// malformed or points at a missing directory resolves to `None`.
pub fn resolve_one(plugin: &PluginDescriptor) -> Option<IosContribution> {
    match inspect(plugin) {
        Ok(contribution) => contribution,
        Err(e @ IosError::SourceNotFound { .. }) => {
            debug!("{}", e);
            None
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Resolve every plugin in parallel, keeping the ones that contribute iOS
/// code in their input order.
pub fn resolve_all(plugins: &[PluginDescriptor]) -> Vec<IosPlugin<'_>> {
    let resolved: Vec<IosPlugin<'_>> = plugins
        .par_iter()
        .filter_map(|plugin| resolve_one(plugin).map(|ios| IosPlugin { plugin, ios }))
        .collect();

    info!(
        "Resolved {} of {} plugins for iOS",
        resolved.len(),
        plugins.len()
    );
    resolved
}

pub fn contributions(plugins: &[PluginDescriptor]) -> Vec<IosContribution> {
    resolve_all(plugins)
        .into_iter()
        .map(|resolved| resolved.ios)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use avocado_plugin::{PlatformManifest, PluginManifest};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn ios_plugin(name: &str, root: &Path, src: Option<&str>) -> PluginDescriptor {
        let manifest = PluginManifest {
            ios: Some(PlatformManifest {
                src: src.map(str::to_string),
            }),
            android: None,
        };
        PluginDescriptor::new(name, root.join(name), manifest)
    }

    /// Create `<root>/<plugin>/ios` containing the given files
    fn create_ios_sources(root: &Path, plugin: &str, files: &[&str]) -> Option<PathBuf> {
        let dir = root.join(plugin).join("ios");
        fs::create_dir_all(&dir).ok()?;
        for file in files {
            fs::write(dir.join(file), "").ok()?;
        }
        Some(dir)
    }

    #[test]
    fn test_no_ios_section_is_absent() {
        let plugin = PluginDescriptor::new(
            "android-only",
            "/nonexistent/android-only",
            PluginManifest {
                ios: None,
                android: Some(PlatformManifest::with_src("android")),
            },
        );
        assert!(inspect(&plugin).is_ok_and(|c| c.is_none()));
        assert_eq!(resolve_one(&plugin), None);
    }

    #[test]
    fn test_missing_src_is_absent() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(_) = create_ios_sources(temp_dir.path(), "camera", &[]) else {
            return;
        };

        for src in [None, Some(""), Some("   ")] {
            let plugin = ios_plugin("camera", temp_dir.path(), src);
            assert!(matches!(
                inspect(&plugin),
                Err(IosError::MissingSource { .. })
            ));
            assert_eq!(resolve_one(&plugin), None);
        }
    }

    #[test]
    fn test_missing_directory_is_absent() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let plugin = ios_plugin("camera", temp_dir.path(), Some("ios"));

        assert!(matches!(
            inspect(&plugin),
            Err(IosError::SourceNotFound { .. })
        ));
        assert_eq!(resolve_one(&plugin), None);
    }

    #[test]
    fn test_rooted_src_stays_inside_plugin() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(ios_dir) = create_ios_sources(temp_dir.path(), "camera", &["Camera.swift"])
        else {
            return;
        };
        let plugin = ios_plugin("camera", temp_dir.path(), Some("/ios"));

        assert_eq!(
            resolve_one(&plugin),
            Some(IosContribution {
                name: "camera".to_string(),
                kind: IosPluginKind::Code,
                path: ios_dir,
            })
        );

        let outside = ios_plugin("camera", temp_dir.path(), Some("/usr/lib"));
        assert!(matches!(
            inspect(&outside),
            Err(IosError::SourceNotFound { path, .. })
                if path == temp_dir.path().join("camera").join("usr").join("lib")
        ));
    }

    #[test]
    fn test_src_is_not_trimmed() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(_) = create_ios_sources(temp_dir.path(), "camera", &["Camera.swift"]) else {
            return;
        };
        let plugin = ios_plugin("camera", temp_dir.path(), Some(" ios "));

        assert!(matches!(
            inspect(&plugin),
            Err(IosError::SourceNotFound { .. })
        ));
        assert_eq!(resolve_one(&plugin), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_src_pointing_at_file_is_unreadable() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let plugin_root = temp_dir.path().join("camera");
        if fs::create_dir_all(&plugin_root).is_err() {
            return;
        }
        if fs::write(plugin_root.join("ios"), "not a directory").is_err() {
            return;
        }
        let plugin = ios_plugin("camera", temp_dir.path(), Some("ios"));

        assert!(matches!(
            inspect(&plugin),
            Err(IosError::Unreadable { .. })
        ));
        assert_eq!(resolve_one(&plugin), None);
    }

    #[test]
    fn test_plain_sources_resolve_as_code() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(ios_dir) =
            create_ios_sources(temp_dir.path(), "camera", &["Camera.swift", "Camera.m"])
        else {
            return;
        };
        let plugin = ios_plugin("camera", temp_dir.path(), Some("ios"));

        let resolved = resolve_one(&plugin);
        assert_eq!(
            resolved,
            Some(IosContribution {
                name: "camera".to_string(),
                kind: IosPluginKind::Code,
                path: ios_dir,
            })
        );
    }

    #[test]
    fn test_podspec_resolves_as_cocoapods() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(ios_dir) =
            create_ios_sources(temp_dir.path(), "camera", &["FooBar.podspec", "Plugin.swift"])
        else {
            return;
        };
        let plugin = ios_plugin("camera", temp_dir.path(), Some("ios"));

        let resolved = resolve_one(&plugin);
        assert_eq!(
            resolved,
            Some(IosContribution {
                name: "FooBar".to_string(),
                kind: IosPluginKind::Cocoapods,
                path: ios_dir,
            })
        );
    }

    #[test]
    fn test_pod_name_stops_at_first_dot() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(_) = create_ios_sources(temp_dir.path(), "maps", &["Maps.Core.podspec"]) else {
            return;
        };
        let plugin = ios_plugin("maps", temp_dir.path(), Some("ios"));

        let resolved = resolve_one(&plugin);
        assert!(resolved.is_some_and(|c| c.name == "Maps" && c.kind == IosPluginKind::Cocoapods));
    }

    #[test]
    fn test_several_podspecs_pick_first_by_name() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(_) = create_ios_sources(
            temp_dir.path(),
            "camera",
            &["Zeta.podspec", "Alpha.podspec", "Mid.podspec"],
        ) else {
            return;
        };
        let plugin = ios_plugin("camera", temp_dir.path(), Some("ios"));

        let resolved = resolve_one(&plugin);
        assert!(resolved.is_some_and(|c| c.name == "Alpha"));
    }

    #[test]
    fn test_resolve_all_filters_and_keeps_order() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        let Some(_) = create_ios_sources(root, "a", &["A.swift"]) else {
            return;
        };
        let Some(_) = create_ios_sources(root, "c", &["Cee.podspec"]) else {
            return;
        };
        let Some(_) = create_ios_sources(root, "e", &[]) else {
            return;
        };

        let plugins = vec![
            ios_plugin("a", root, Some("ios")),
            ios_plugin("b", root, Some("ios")),
            ios_plugin("c", root, Some("ios")),
            PluginDescriptor::new("d", root.join("d"), PluginManifest::default()),
            ios_plugin("e", root, Some("ios")),
            ios_plugin("f", root, None),
        ];

        let resolved = resolve_all(&plugins);
        let names: Vec<(&str, &str)> = resolved
            .iter()
            .map(|r| (r.plugin.name.as_str(), r.ios.name.as_str()))
            .collect();
        assert_eq!(names, vec![("a", "a"), ("c", "Cee"), ("e", "e")]);

        // Same filesystem, same answer
        assert_eq!(resolve_all(&plugins), resolved);
        assert_eq!(
            contributions(&plugins),
            resolved.into_iter().map(|r| r.ios).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_resolve_all_empty_input() {
        assert!(resolve_all(&[]).is_empty());
    }
}
