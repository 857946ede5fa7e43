//! Configuration for avocado projects
//!
//! This crate owns everything that describes *where* things live in a host
//! project: the optional `avocado.toml` file, the resolved project layout
//! (project root, native iOS directory, installed plugin directory), and the
//! lookup of external command-line tools such as CocoaPods' `pod`.
//!
//! Nothing here reads ambient process-wide paths except [`AvocadoConfig::path`],
//! which honours the `AVOCADO_CONFIG` override. Everything downstream receives an
//! explicit [`ProjectLayout`].

pub mod config;
pub mod errors;
pub mod layout;
pub mod tools;

pub use config::AvocadoConfig;
pub use errors::ConfigError;
pub use layout::ProjectLayout;
pub use tools::ToolLocator;
