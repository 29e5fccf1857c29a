use scratchpads::settings::{SettingsLayer, SettingsStore, SETTINGS_FILE_NAME};
use scratchpads::{EditorHost, InputOptions, PickEntry, ScratchpadsManager, UserInterface};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

use anyhow::{bail, Result};

/// Isolated scratchpads home for one test.
pub struct Harness {
    home: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create temp home"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Directory the global selector resolves to under this harness.
    pub fn scratch_dir(&self) -> PathBuf {
        self.home.path().join("scratchpads").join("global")
    }

    pub fn recent_filetypes_path(&self) -> PathBuf {
        self.home.path().join("scratchpads").join("recent_filetypes.json")
    }

    pub fn global_settings_path(&self) -> PathBuf {
        self.home.path().join(SETTINGS_FILE_NAME)
    }

    /// Settings rooted in the temp home; `configure` tweaks the global layer.
    pub fn settings(&self, configure: impl FnOnce(&mut SettingsLayer)) -> SettingsStore {
        let mut global = SettingsLayer {
            scratchpads_folder: Some(self.home.path().to_path_buf()),
            ..SettingsLayer::default()
        };
        configure(&mut global);
        SettingsStore::with_layers(self.global_settings_path(), global, SettingsLayer::default())
    }

    pub fn manager(
        &self,
        configure: impl FnOnce(&mut SettingsLayer),
        ui: ScriptedUi,
        editor: FakeEditor,
    ) -> ScratchpadsManager<ScriptedUi, FakeEditor> {
        let mut manager = ScratchpadsManager::new(self.settings(configure), None, ui, editor)
            .expect("failed to build manager");
        manager.set_settle(Duration::ZERO);
        manager
    }
}

/// One scripted answer to the next UI prompt.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Select the first pick item whose label contains this text.
    Pick(&'static str),
    /// Submit this text in an input box.
    Input(&'static str),
    /// Press the button with this label.
    Choose(&'static str),
    /// Dismiss whatever prompt comes next.
    Dismiss,
}

/// UI double that answers prompts from a fixed script and records messages.
/// An unscripted prompt panics so tests notice unexpected interaction.
pub struct ScriptedUi {
    replies: RefCell<VecDeque<Reply>>,
    infos: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ScriptedUi {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            infos: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
        }
    }

    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    fn next(&self, prompt: &str) -> Reply {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for prompt: {prompt}"))
    }
}

impl UserInterface for ScriptedUi {
    fn pick(&self, placeholder: &str, entries: &[PickEntry]) -> Option<usize> {
        match self.next(placeholder) {
            Reply::Pick(needle) => {
                let index = entries
                    .iter()
                    .position(|entry| {
                        matches!(entry, PickEntry::Item(label) if label.contains(needle))
                    })
                    .unwrap_or_else(|| panic!("no pick item containing {needle:?}"));
                Some(index)
            }
            Reply::Dismiss => None,
            other => panic!("expected Pick reply for {placeholder:?}, got {other:?}"),
        }
    }

    fn input(&self, options: &InputOptions) -> Option<String> {
        match self.next(&options.placeholder) {
            Reply::Input(text) => Some(text.to_string()),
            Reply::Dismiss => None,
            other => panic!(
                "expected Input reply for {:?}, got {other:?}",
                options.placeholder
            ),
        }
    }

    fn choose(&self, message: &str, buttons: &[&str]) -> Option<usize> {
        match self.next(message) {
            Reply::Choose(label) => Some(
                buttons
                    .iter()
                    .position(|button| *button == label)
                    .unwrap_or_else(|| panic!("no button labeled {label:?}")),
            ),
            Reply::Dismiss => None,
            other => panic!("expected Choose reply for {message:?}, got {other:?}"),
        }
    }

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
struct EditorState {
    tabs: Vec<PathBuf>,
    active: usize,
    opened: Vec<PathBuf>,
    closed: Vec<PathBuf>,
    saved: Vec<PathBuf>,
    formatted: Vec<PathBuf>,
    revealed: Vec<PathBuf>,
    clipboard: Option<String>,
}

/// In-memory editor with a tab ring. In direct mode `open_tabs` enumerates
/// the ring; in cycling mode it returns `None`, forcing the coordinator into
/// cycle-and-probe.
pub struct FakeEditor {
    state: RefCell<EditorState>,
    supports_listing: bool,
}

impl FakeEditor {
    pub fn direct() -> Self {
        Self {
            state: RefCell::new(EditorState::default()),
            supports_listing: true,
        }
    }

    pub fn cycling() -> Self {
        Self {
            state: RefCell::new(EditorState::default()),
            supports_listing: false,
        }
    }

    pub fn with_tabs(self, tabs: Vec<PathBuf>) -> Self {
        self.state.borrow_mut().tabs = tabs;
        self
    }

    pub fn set_clipboard(&self, text: &str) {
        self.state.borrow_mut().clipboard = Some(text.to_string());
    }

    pub fn tabs(&self) -> Vec<PathBuf> {
        self.state.borrow().tabs.clone()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.state.borrow().opened.clone()
    }

    pub fn closed(&self) -> Vec<PathBuf> {
        self.state.borrow().closed.clone()
    }

    pub fn saved(&self) -> Vec<PathBuf> {
        self.state.borrow().saved.clone()
    }

    pub fn formatted(&self) -> Vec<PathBuf> {
        self.state.borrow().formatted.clone()
    }

    pub fn revealed(&self) -> Vec<PathBuf> {
        self.state.borrow().revealed.clone()
    }
}

impl EditorHost for FakeEditor {
    fn open_document(&self, path: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.opened.push(path.to_path_buf());
        let position = state.tabs.iter().position(|tab| tab == path);
        state.active = match position {
            Some(index) => index,
            None => {
                state.tabs.push(path.to_path_buf());
                state.tabs.len() - 1
            }
        };
        Ok(())
    }

    fn active_document(&self) -> Result<Option<PathBuf>> {
        let state = self.state.borrow();
        Ok(state.tabs.get(state.active).cloned())
    }

    fn close_active_document(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.tabs.is_empty() {
            return Ok(());
        }
        let index = state.active;
        let removed = state.tabs.remove(index);
        state.closed.push(removed);
        if state.active >= state.tabs.len() {
            state.active = 0;
        }
        Ok(())
    }

    fn next_document(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.tabs.is_empty() {
            state.active = (state.active + 1) % state.tabs.len();
        }
        Ok(())
    }

    fn open_tabs(&self) -> Option<Vec<PathBuf>> {
        self.supports_listing.then(|| self.state.borrow().tabs.clone())
    }

    fn close_tab(&self, path: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let active_path = state.tabs.get(state.active).cloned();
        state.tabs.retain(|tab| tab != path);
        state.closed.push(path.to_path_buf());
        state.active = active_path
            .and_then(|active| state.tabs.iter().position(|tab| *tab == active))
            .unwrap_or(0);
        Ok(())
    }

    fn save_document(&self, path: &Path) -> Result<()> {
        self.state.borrow_mut().saved.push(path.to_path_buf());
        Ok(())
    }

    fn format_document(&self, path: &Path) -> Result<()> {
        self.state.borrow_mut().formatted.push(path.to_path_buf());
        Ok(())
    }

    fn clipboard_text(&self) -> Result<String> {
        match &self.state.borrow().clipboard {
            Some(text) => Ok(text.clone()),
            None => bail!("no clipboard content"),
        }
    }

    fn reveal_in_file_browser(&self, path: &Path) -> Result<()> {
        self.state.borrow_mut().revealed.push(path.to_path_buf());
        Ok(())
    }
}
