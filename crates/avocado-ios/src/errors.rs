use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a plugin that declares iOS support does not resolve
#[derive(Error, Debug)]
pub enum IosError {
    #[error("Plugin '{plugin}' has an ios section but avocado.ios.src is missing")]
    MissingSource { plugin: String },

    #[error("iOS sources of plugin '{plugin}' not found: {}", .path.display())]
    SourceNotFound { plugin: String, path: PathBuf },

    #[error("Failed to read iOS sources of plugin '{plugin}' at {}: {source}", .path.display())]
    Unreadable {
        plugin: String,
        path: PathBuf,
        source: io::Error,
    },
}

/// Environment preconditions for iOS workflows.
///
/// The `Display` text is the remediation message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectCheckError {
    #[error("iOS was not created yet. Run `avocado start ios`.")]
    MissingProject,

    #[error("An iOS project already exist")]
    ProjectExists,

    #[error("cocoapods is not installed. For information: https://guides.cocoapods.org/using/getting-started.html#installation")]
    CocoapodsMissing,
}
