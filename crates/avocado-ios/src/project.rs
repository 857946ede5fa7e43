//! Native iOS project checks
//!
//! Guards that gate iOS workflows: the project must exist before it can be
//! built or synced, must not exist before it is created, and CocoaPods must be
//! installed to integrate pod-based plugins.

use avocado_config::tools::POD_TOOL;
use avocado_config::{AvocadoConfig, ProjectLayout, ToolLocator};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::ProjectCheckError;
use crate::listing;

/// File suffix of an Xcode workspace bundle
pub const WORKSPACE_SUFFIX: &str = ".xcworkspace";

#[derive(Debug, Clone)]
pub struct IosProject {
    layout: ProjectLayout,
}

impl IosProject {
    pub fn new(layout: ProjectLayout) -> Self {
        IosProject { layout }
    }

    pub fn from_config(config: &AvocadoConfig, project_root: &Path) -> Self {
        Self::new(config.layout(project_root))
    }

    /// The native iOS project directory
    pub fn path(&self) -> &Path {
        self.layout.ios_dir()
    }

    pub fn has_ios_project(&self) -> bool {
        self.path().exists()
    }

    /// Fails when the iOS project has not been created yet.
    pub fn require_project(&self) -> Result<(), ProjectCheckError> {
        if self.has_ios_project() {
            Ok(())
        } else {
            Err(ProjectCheckError::MissingProject)
        }
    }

    /// Fails when an iOS project already exists, so it is not created twice.
    pub fn require_no_project(&self) -> Result<(), ProjectCheckError> {
        if self.has_ios_project() {
            Err(ProjectCheckError::ProjectExists)
        } else {
            Ok(())
        }
    }

    /// Find the Xcode workspace bundle in the iOS project directory.
    ///
    /// With several bundles the first by name wins.
    pub fn find_workspace_file(&self) -> Option<PathBuf> {
        let entries = match listing::sorted_entry_names(self.path()) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list iOS project {:?}: {}", self.path(), e);
                return None;
            }
        };
        listing::first_with_suffix(&entries, WORKSPACE_SUFFIX).map(|name| self.path().join(name))
    }

    /// Run every precondition for working on an existing iOS project and
    /// collect all failures.
    pub fn doctor(&self, tools: &ToolLocator) -> Vec<ProjectCheckError> {
        let mut problems = Vec::new();
        if let Err(e) = self.require_project() {
            problems.push(e);
        }
        if let Err(e) = check_cocoapods(tools) {
            problems.push(e);
        }
        problems
    }
}

/// Locate the CocoaPods `pod` executable.
pub fn check_cocoapods(tools: &ToolLocator) -> Result<PathBuf, ProjectCheckError> {
    tools
        .locate(POD_TOOL)
        .ok_or(ProjectCheckError::CocoapodsMissing)
}
