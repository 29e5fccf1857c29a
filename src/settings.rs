//! Layered configuration for scratchpads.
//!
//! Two TOML layers are consulted for every key: an optional workspace file
//! (`.scratchpads.toml` in the workspace root) and the per-install global
//! file under the scratchpads home. Lookup order is workspace -> global ->
//! built-in default. The resolved [`Settings`] value is immutable; callers
//! re-resolve after a configuration change instead of mutating it.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Global settings file name, stored under the scratchpads home.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";
/// Per-workspace override file, stored in the workspace root.
pub const WORKSPACE_SETTINGS_FILE_NAME: &str = ".scratchpads.toml";
/// Base filename used when no prefix is configured and no name is prompted.
pub const DEFAULT_FILE_PREFIX: &str = "scratch";

/// One configuration layer. Every key is optional so absent keys fall
/// through to the next layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsLayer {
    /// Custom root folder replacing the per-install storage path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratchpads_folder: Option<PathBuf>,
    /// Share one scratch folder across all workspaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_global_folder: Option<bool>,
    /// Extension (without dot) used by the "new with default type" command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_filetype: Option<String>,
    /// Base filename for new scratchpads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_prefix: Option<String>,
    /// Ask for a filename on every create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_for_filename: Option<bool>,
    /// Ask for confirmation before "remove all".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_for_removal: Option<bool>,
    /// Rename prompts include (and replace) the extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_with_extension: Option<bool>,
    /// Seed new scratchpads with the clipboard contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_paste: Option<bool>,
    /// Format the document after an auto-paste.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_format: Option<bool>,
}

/// Effective configuration after layer resolution.
#[derive(Debug, Clone)]
pub struct Settings {
    pub scratchpads_folder: Option<PathBuf>,
    pub use_global_folder: bool,
    pub default_filetype: Option<String>,
    pub file_prefix: String,
    pub prompt_for_filename: bool,
    pub prompt_for_removal: bool,
    pub rename_with_extension: bool,
    pub auto_paste: bool,
    pub auto_format: bool,
}

/// Returns the per-install root directory where scratchpads stores data.
///
/// Order of precedence:
/// 1. `SCRATCHPADS_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn scratchpads_home() -> Result<PathBuf> {
    if let Ok(path) = env::var("SCRATCHPADS_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("Scratchpads"))
}

/// Path of the global settings file.
pub fn global_settings_path() -> Result<PathBuf> {
    Ok(scratchpads_home()?.join(SETTINGS_FILE_NAME))
}

/// Holds both configuration layers and persists mutations of the global one.
pub struct SettingsStore {
    global_path: PathBuf,
    global: SettingsLayer,
    workspace: SettingsLayer,
}

impl SettingsStore {
    /// Loads both layers. A missing file is an empty layer; a malformed file
    /// is a real error since silently ignoring it would hide the user's
    /// intent.
    pub fn load(workspace: Option<&Path>) -> Result<Self> {
        let global_path = global_settings_path()?;
        let global = load_layer(&global_path)?;
        let workspace = match workspace {
            Some(root) => load_layer(&root.join(WORKSPACE_SETTINGS_FILE_NAME))?,
            None => SettingsLayer::default(),
        };
        Ok(Self {
            global_path,
            global,
            workspace,
        })
    }

    /// Builds a store from explicit layers and a global file location,
    /// bypassing the on-disk lookup. Mutations still persist to
    /// `global_path`.
    pub fn with_layers(
        global_path: PathBuf,
        global: SettingsLayer,
        workspace: SettingsLayer,
    ) -> Self {
        Self {
            global_path,
            global,
            workspace,
        }
    }

    /// Resolves the effective settings, workspace -> global -> default.
    pub fn effective(&self) -> Settings {
        let ws = &self.workspace;
        let g = &self.global;
        Settings {
            scratchpads_folder: ws
                .scratchpads_folder
                .clone()
                .or_else(|| g.scratchpads_folder.clone()),
            use_global_folder: pick(ws.use_global_folder, g.use_global_folder, false),
            default_filetype: ws
                .default_filetype
                .clone()
                .or_else(|| g.default_filetype.clone()),
            file_prefix: ws
                .file_prefix
                .clone()
                .or_else(|| g.file_prefix.clone())
                .unwrap_or_else(|| DEFAULT_FILE_PREFIX.to_string()),
            prompt_for_filename: pick(ws.prompt_for_filename, g.prompt_for_filename, false),
            prompt_for_removal: pick(ws.prompt_for_removal, g.prompt_for_removal, true),
            rename_with_extension: pick(ws.rename_with_extension, g.rename_with_extension, false),
            auto_paste: pick(ws.auto_paste, g.auto_paste, false),
            auto_format: pick(ws.auto_format, g.auto_format, false),
        }
    }

    /// Records the default filetype (extension without dot) in the global layer.
    pub fn set_default_filetype(&mut self, ext: &str) -> Result<()> {
        self.global.default_filetype = Some(ext.to_string());
        self.save_global()
    }

    /// Records the "always skip removal prompt" choice in the global layer.
    pub fn set_prompt_for_removal(&mut self, value: bool) -> Result<()> {
        self.global.prompt_for_removal = Some(value);
        self.save_global()
    }

    fn save_global(&self) -> Result<()> {
        if let Some(parent) = self.global_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed creating settings directory {:?}", parent))?;
        }
        let data = toml::to_string_pretty(&self.global)?;
        fs::write(&self.global_path, data)
            .with_context(|| format!("Failed writing settings file {:?}", self.global_path))?;
        Ok(())
    }
}

fn load_layer(path: &Path) -> Result<SettingsLayer> {
    if !path.exists() {
        return Ok(SettingsLayer::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {:?}", path))?;
    let layer = toml::from_str(&data)
        .with_context(|| format!("Failed to parse settings file {:?}", path))?;
    Ok(layer)
}

fn pick<T>(workspace: Option<T>, global: Option<T>, default: T) -> T {
    workspace.or(global).unwrap_or(default)
}
