//! iOS platform support for avocado
//!
//! Two concerns live here:
//!
//! - [`IosProject`]: guards around the native iOS project directory (does it
//!   exist, is CocoaPods available) and lookup of its `.xcworkspace` bundle.
//! - [`resolver`]: decides, per installed plugin, whether it contributes iOS
//!   code and whether that code is raw sources or a CocoaPods pod.
//!
//! Resolution never fails as a whole. A plugin with a broken or stale iOS
//! declaration is left out of the result and reported through `tracing`;
//! use [`inspect`] to see why a single plugin was excluded.

pub mod errors;
mod listing;
pub mod project;
pub mod resolver;

pub use errors::{IosError, ProjectCheckError};
pub use project::{check_cocoapods, IosProject};
pub use resolver::{
    contributions, inspect, resolve_all, resolve_one, IosContribution, IosPlugin, IosPluginKind,
};
