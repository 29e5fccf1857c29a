//! Orchestration of the user-facing commands.
//!
//! The manager composes the settings store, the resolved paths, the filetype
//! catalog, the scratchpad store, and the tab coordinator, and talks to the
//! host through the two ports. Every prompt may be dismissed; a dismissal
//! short-circuits the whole command with no side effects.

use crate::filetypes::{normalize_extension, Filetype, FiletypeCatalog};
use crate::host::{sanitize_input, EditorHost, InputOptions, PickEntry, UserInterface};
use crate::paths::ScratchPaths;
use crate::settings::{Settings, SettingsStore};
use crate::store::ScratchpadStore;
use crate::tabs::{TabCoordinator, SETTLE_DELAY};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub struct ScratchpadsManager<U: UserInterface, E: EditorHost> {
    settings: SettingsStore,
    workspace: Option<PathBuf>,
    paths: ScratchPaths,
    catalog: FiletypeCatalog,
    store: ScratchpadStore,
    ui: U,
    editor: E,
    settle: Duration,
}

impl<U: UserInterface, E: EditorHost> ScratchpadsManager<U, E> {
    pub fn new(
        settings: SettingsStore,
        workspace: Option<PathBuf>,
        ui: U,
        editor: E,
    ) -> Result<Self> {
        let paths = ScratchPaths::resolve(&settings.effective(), workspace.as_deref())?;
        let catalog = FiletypeCatalog::new(paths.recent_filetypes_file.clone());
        let store = ScratchpadStore::new(&paths);
        Ok(Self {
            settings,
            workspace,
            paths,
            catalog,
            store,
            ui,
            editor,
            settle: SETTLE_DELAY,
        })
    }

    /// Re-resolves settings and paths after a configuration change. The old
    /// resolved values are replaced wholesale, never mutated in place.
    pub fn reload_configuration(&mut self) -> Result<()> {
        self.settings = SettingsStore::load(self.workspace.as_deref())?;
        self.paths = ScratchPaths::resolve(&self.settings.effective(), self.workspace.as_deref())?;
        self.catalog = FiletypeCatalog::new(self.paths.recent_filetypes_file.clone());
        self.store = ScratchpadStore::new(&self.paths);
        Ok(())
    }

    pub fn scratch_dir(&self) -> &Path {
        self.store.dir()
    }

    pub fn store(&self) -> &ScratchpadStore {
        &self.store
    }

    pub fn catalog(&self) -> &FiletypeCatalog {
        &self.catalog
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Settle delay for tab-cycle operations; tests set `Duration::ZERO`.
    pub fn set_settle(&mut self, settle: Duration) {
        self.settle = settle;
    }

    /// Creates a new scratchpad. Prompts for a filetype unless one is given,
    /// optionally prompts for a filename, seeds clipboard content when
    /// auto-paste is enabled, and opens the file in the editor.
    pub fn new_scratchpad(&mut self, filetype: Option<Filetype>) -> Result<Option<PathBuf>> {
        if !self.confirm_folder() {
            return Ok(None);
        }
        let filetype = match filetype {
            Some(filetype) => filetype,
            None => match self.catalog.select_filetype(&self.ui, None)? {
                Some(filetype) => filetype,
                None => return Ok(None),
            },
        };

        let settings = self.settings.effective();
        let mut base = settings.file_prefix.clone();
        if settings.prompt_for_filename {
            let Some(raw) = self.ui.input(&InputOptions::new("Enter a filename")) else {
                return Ok(None);
            };
            let name = sanitize_input(&raw, false);
            if !name.is_empty() {
                base = name;
            }
        }

        let contents = if settings.auto_paste {
            match self.editor.clipboard_text() {
                Ok(text) => text,
                Err(err) => {
                    warn!(%err, "clipboard read failed; creating empty scratchpad");
                    String::new()
                }
            }
        } else {
            String::new()
        };

        let path = self.store.create(&base, &filetype.ext, &contents)?;
        self.editor.open_document(&path)?;
        if settings.auto_paste && settings.auto_format {
            self.editor.format_document(&path)?;
        }
        Ok(Some(path))
    }

    /// Creates a scratchpad of the configured default filetype. With no
    /// default configured the user picks one, and the pick is persisted as
    /// the new default.
    pub fn new_scratchpad_default(&mut self) -> Result<Option<PathBuf>> {
        let settings = self.settings.effective();
        let mut default = self
            .catalog
            .default_filetype(settings.default_filetype.as_deref());

        if default.is_none() {
            let Some(selected) = self
                .catalog
                .select_filetype(&self.ui, Some("Select default filetype"))?
            else {
                return Ok(None);
            };
            self.settings
                .set_default_filetype(&normalize_extension(&selected.ext))?;
            default = Some(selected);
        }

        self.new_scratchpad(default)
    }

    /// Lists scratchpads and opens the picked one.
    pub fn open_scratchpad(&mut self) -> Result<Option<PathBuf>> {
        if !self.confirm_folder() {
            return Ok(None);
        }
        let names = self.store.file_names()?;
        if names.is_empty() {
            self.ui.info("No scratchpads to open");
            return Ok(None);
        }

        let entries: Vec<PickEntry> = names
            .iter()
            .map(|name| PickEntry::Item(name.clone()))
            .collect();
        let Some(index) = self.ui.pick("Select scratchpad", &entries) else {
            return Ok(None);
        };

        let path = self.store.path_for(&names[index]);
        if !path.exists() {
            // Vanished between listing and pick.
            return Ok(None);
        }
        self.editor.open_document(&path)?;
        Ok(Some(path))
    }

    /// Opens the most recently modified scratchpad.
    pub fn open_latest_scratchpad(&mut self) -> Result<Option<PathBuf>> {
        if !self.confirm_folder() {
            return Ok(None);
        }
        let latest = match self.store.latest() {
            Ok(latest) => latest,
            Err(err) => {
                self.ui
                    .error(&format!("Failed to open latest scratchpad: {err:#}"));
                return Ok(None);
            }
        };
        let Some(file) = latest else {
            self.ui.info("No scratchpads to open");
            return Ok(None);
        };
        if let Err(err) = self.editor.open_document(&file.path) {
            self.ui
                .error(&format!("Failed to open latest scratchpad: {err:#}"));
            return Ok(None);
        }
        Ok(Some(file.path))
    }

    /// Renames the scratchpad shown in the active editor. The document is
    /// saved and its tabs closed before the filesystem rename, then the file
    /// is reopened under its new name.
    pub fn rename_scratchpad(&mut self) -> Result<Option<PathBuf>> {
        if !self.confirm_folder() {
            return Ok(None);
        }
        let active = self.editor.active_document()?;
        let Some(current) = active.filter(|path| self.paths.is_scratch_path(path)) else {
            self.ui.info("Please open a scratchpad file first");
            return Ok(None);
        };
        let current_name = current
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = match current_name.rfind('.') {
            Some(idx) => current_name[idx..].to_string(),
            None => String::new(),
        };

        let settings = self.settings.effective();
        let initial = if settings.rename_with_extension {
            current_name.clone()
        } else {
            current_name
                .strip_suffix(ext.as_str())
                .unwrap_or(&current_name)
                .to_string()
        };

        let Some(raw) = self
            .ui
            .input(&InputOptions::new("Enter new filename").with_initial(initial))
        else {
            return Ok(None);
        };
        let input = sanitize_input(&raw, false);
        if input.is_empty() {
            return Ok(None);
        }
        let final_name = if settings.rename_with_extension {
            input
        } else {
            format!("{input}{ext}")
        };

        let target = self.store.path_for(&final_name);
        if target.exists() {
            let message = format!("A file named \"{final_name}\" already exists");
            let Some(choice) = self.ui.choose(&message, &["Overwrite", "Cancel"]) else {
                return Ok(None);
            };
            if choice != 0 {
                return Ok(None);
            }
        }

        match self.perform_rename(&current, &current_name, &final_name) {
            Ok(path) => {
                self.ui.info(&format!("Renamed to {final_name}"));
                Ok(Some(path))
            }
            Err(err) => {
                self.ui.error(&format!("Failed to rename file: {err:#}"));
                Ok(None)
            }
        }
    }

    fn perform_rename(&self, current: &Path, from: &str, to: &str) -> Result<PathBuf> {
        // A file with no open editor can be renamed bare; otherwise the
        // document is saved and closed first and reopened afterwards.
        let was_open = self.coordinator().find_open_editor(current).is_some();
        if was_open {
            self.editor.save_document(current)?;
            self.coordinator().close_tabs_for_path(current)?;
        }
        let target = self.store.rename(from, to)?;
        if was_open {
            self.editor.open_document(&target)?;
        }
        Ok(target)
    }

    /// Removes one picked scratchpad, closing its tabs first.
    pub fn remove_scratchpad(&mut self) -> Result<()> {
        if !self.confirm_folder() {
            return Ok(());
        }
        let names = self.store.file_names()?;
        if names.is_empty() {
            self.ui.info("No scratchpads to delete");
            return Ok(());
        }

        let entries: Vec<PickEntry> = names
            .iter()
            .map(|name| PickEntry::Item(name.clone()))
            .collect();
        let Some(index) = self.ui.pick("Select scratchpad to remove", &entries) else {
            return Ok(());
        };
        let name = &names[index];

        self.coordinator()
            .close_tabs_for_path(&self.store.path_for(name))?;
        self.store.remove(name)?;
        self.ui.info(&format!("Removed {name}"));
        Ok(())
    }

    /// Removes every scratchpad after confirmation. Answering "Always"
    /// persists the choice and skips the prompt from then on.
    pub fn remove_all_scratchpads(&mut self) -> Result<()> {
        if !self.confirm_folder() {
            return Ok(());
        }
        if !self.confirm_removal()? {
            return Ok(());
        }
        self.coordinator().close_all_scratch_tabs(self.store.dir())?;
        self.store.remove_all()?;
        self.ui.info("Removed all scratchpads");
        Ok(())
    }

    /// Adds a custom filetype and immediately creates a scratchpad of it.
    pub fn new_filetype(&mut self) -> Result<Option<PathBuf>> {
        let Some(filetype) = self.catalog.add_custom_type(&self.ui)? else {
            return Ok(None);
        };
        self.new_scratchpad(Some(filetype))
    }

    /// Removes a custom filetype from the recent list.
    pub fn remove_filetype(&mut self) -> Result<()> {
        self.catalog.remove_custom_type(&self.ui)
    }

    /// Reveals the scratch directory in the host's file browser.
    pub fn open_scratchpads_folder(&mut self) -> Result<()> {
        if !self.confirm_folder() {
            return Ok(());
        }
        self.editor.reveal_in_file_browser(self.store.dir())
    }

    /// The effective settings, re-resolved on every call.
    pub fn effective_settings(&self) -> Settings {
        self.settings.effective()
    }

    fn coordinator(&self) -> TabCoordinator<'_> {
        TabCoordinator::with_settle(&self.editor, self.settle)
    }

    /// Guards every filesystem-touching command. A failure here is a
    /// configuration error: reported once, command aborted.
    fn confirm_folder(&self) -> bool {
        match self.store.ensure_dir() {
            Ok(()) => true,
            Err(err) => {
                self.ui.error(&format!("{err:#}"));
                false
            }
        }
    }

    fn confirm_removal(&mut self) -> Result<bool> {
        let settings = self.settings.effective();
        if !settings.prompt_for_removal {
            return Ok(true);
        }
        let Some(choice) = self
            .ui
            .choose("Are you sure you want to remove all scratchpads?", &["Yes", "Always"])
        else {
            return Ok(false);
        };
        if choice == 1 {
            self.settings.set_prompt_for_removal(false)?;
        }
        Ok(true)
    }
}
