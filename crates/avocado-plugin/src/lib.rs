//! Avocado plugin model
//!
//! A plugin is an installed package whose `package.json` carries an `avocado`
//! section declaring per-platform native sources. This crate parses that
//! declaration into [`PluginDescriptor`]s and discovers the plugins a host
//! project depends on. Platform crates (e.g. `avocado-ios`) consume the
//! descriptors; they never read `package.json` themselves.

pub mod discovery;
pub mod errors;
pub mod types;

pub use discovery::{read_descriptor, PluginDiscoverer};
pub use errors::PluginError;
pub use types::{PlatformManifest, PluginDescriptor, PluginManifest};
