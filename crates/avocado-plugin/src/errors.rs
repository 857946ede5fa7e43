use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering plugins
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse package.json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No package.json found at {}", .0.display())]
    HostManifestNotFound(PathBuf),
}
