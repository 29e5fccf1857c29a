//! Resolution of the scratch directory layout.
//!
//! Layout: `<root>/scratchpads/<selector>/` where `<root>` is either the
//! configured custom folder or the per-install storage path, and
//! `<selector>` is the `global` sentinel or a hash of the workspace path.
//! The resolved value is immutable; it is recomputed from fresh settings
//! when the configuration changes.

use crate::settings::{scratchpads_home, Settings};
use anyhow::Result;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Folder under the root holding all scratch state.
pub const SCRATCHPADS_FOLDER_NAME: &str = "scratchpads";
/// Selector used when scratchpads are shared across workspaces.
pub const GLOBAL_FOLDER_NAME: &str = "global";
/// Persisted recent/custom filetype list, stored at the root.
pub const RECENT_FILETYPES_FILE: &str = "recent_filetypes.json";

/// Resolved filesystem locations for one configuration + workspace pair.
#[derive(Debug, Clone)]
pub struct ScratchPaths {
    /// `<root>/scratchpads`.
    pub root: PathBuf,
    /// Directory holding this workspace's scratch files.
    pub project_dir: PathBuf,
    /// Location of the recent-filetypes JSON file.
    pub recent_filetypes_file: PathBuf,
    /// The configured custom root, surfaced in configuration errors.
    pub custom_root: Option<PathBuf>,
}

impl ScratchPaths {
    /// Computes all paths from the effective settings and the active
    /// workspace. With no workspace open the global selector is always used.
    pub fn resolve(settings: &Settings, workspace: Option<&Path>) -> Result<Self> {
        let base = match &settings.scratchpads_folder {
            Some(custom) => custom.clone(),
            None => scratchpads_home()?,
        };
        let root = base.join(SCRATCHPADS_FOLDER_NAME);

        let selector = match workspace {
            Some(ws) if !settings.use_global_folder => workspace_selector(ws),
            _ => GLOBAL_FOLDER_NAME.to_string(),
        };

        Ok(Self {
            project_dir: root.join(selector),
            recent_filetypes_file: root.join(RECENT_FILETYPES_FILE),
            custom_root: settings.scratchpads_folder.clone(),
            root,
        })
    }

    /// True when the given path points into the scratch directory.
    pub fn is_scratch_path(&self, path: &Path) -> bool {
        path.parent() == Some(self.project_dir.as_path())
    }
}

/// Deterministic per-workspace folder name: hex SHA-256 of the workspace path.
fn workspace_selector(workspace: &Path) -> String {
    let digest = Sha256::digest(workspace.to_string_lossy().as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
