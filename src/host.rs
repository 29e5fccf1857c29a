//! Ports to the host environment.
//!
//! The UI layer (pickers, input boxes, messages) and the editor (documents,
//! tabs, clipboard) are external collaborators. The core talks to them only
//! through these traits, so the same manager runs against a real host, the
//! terminal host in `bin/scratch`, or the scripted fakes in the tests.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// One row of a sectioned picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickEntry {
    /// Non-selectable section header.
    Separator(String),
    /// Selectable row.
    Item(String),
}

impl PickEntry {
    pub fn label(&self) -> &str {
        match self {
            PickEntry::Separator(label) | PickEntry::Item(label) => label,
        }
    }
}

/// Options for a text input prompt.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    pub placeholder: String,
    /// Prefilled value, e.g. the current filename during a rename.
    pub initial_value: String,
    /// Display names may contain spaces; filenames may not.
    pub allow_spaces: bool,
}

impl InputOptions {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn with_initial(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn allow_spaces(mut self) -> Self {
        self.allow_spaces = true;
        self
    }
}

/// User-facing prompts and messages. Every prompt may be dismissed, which
/// callers must treat as cancellation of the whole operation.
pub trait UserInterface {
    /// Shows a sectioned picker; returns the index of the chosen entry.
    /// Implementations never return the index of a separator.
    fn pick(&self, placeholder: &str, entries: &[PickEntry]) -> Option<usize>;

    /// Shows a text input; returns the raw submitted text.
    fn input(&self, options: &InputOptions) -> Option<String>;

    /// Shows a warning with labeled buttons; returns the chosen index.
    fn choose(&self, message: &str, buttons: &[&str]) -> Option<usize>;

    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Editor-side capabilities. `open_tabs` returning `None` signals that the
/// host cannot enumerate open documents, which forces the tab coordinator
/// into its cycle-and-probe strategy.
pub trait EditorHost {
    fn open_document(&self, path: &Path) -> Result<()>;

    /// The currently focused document, if any.
    fn active_document(&self) -> Result<Option<PathBuf>>;

    /// Closes the focused document. Effects may be observable only after a
    /// settle delay.
    fn close_active_document(&self) -> Result<()>;

    /// Moves focus to the next document in the tab ring.
    fn next_document(&self) -> Result<()>;

    /// All open document paths, or `None` when the host cannot enumerate them.
    fn open_tabs(&self) -> Option<Vec<PathBuf>>;

    /// Closes every tab showing the given path. Only meaningful when
    /// `open_tabs` is supported.
    fn close_tab(&self, path: &Path) -> Result<()>;

    fn save_document(&self, path: &Path) -> Result<()>;

    fn format_document(&self, path: &Path) -> Result<()>;

    fn clipboard_text(&self) -> Result<String>;

    fn reveal_in_file_browser(&self, path: &Path) -> Result<()>;
}

/// Filters raw prompt input down to filesystem-safe text: keeps
/// `[a-zA-Z0-9_.-]` (plus spaces for display names), trims leading and
/// trailing dots and whitespace, and collapses dot runs.
pub fn sanitize_input(raw: &str, allow_spaces: bool) -> String {
    let mut filtered = String::with_capacity(raw.len());
    let mut last_was_dot = false;
    for ch in raw.chars() {
        let valid = ch.is_ascii_alphanumeric()
            || ch == '_'
            || ch == '.'
            || ch == '-'
            || (allow_spaces && ch == ' ');
        if !valid {
            continue;
        }
        if ch == '.' {
            if last_was_dot {
                continue;
            }
            last_was_dot = true;
        } else {
            last_was_dot = false;
        }
        filtered.push(ch);
    }
    filtered
        .trim_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}
