//! Filetype catalog: the built-in language table merged with the persisted
//! recent/custom list.
//!
//! The recent list is a hybrid store: it orders recently selected types
//! most-recent-first and it is also the durable home of user-added custom
//! types. Extensions are unique within it (dot- and case-insensitive);
//! re-selecting an existing entry moves it to the head instead of
//! duplicating it. Every mutation persists the list before returning.

mod languages;

pub use languages::LANGUAGES;

use crate::host::{sanitize_input, InputOptions, PickEntry, UserInterface};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A selectable (display name, extension) pair. The extension always
/// carries its leading dot; identity is the normalized extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filetype {
    pub name: String,
    pub ext: String,
}

impl Filetype {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.ext)
    }
}

/// Strips leading dots and lower-cases, for comparisons only.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

struct CatalogItem {
    entry: PickEntry,
    filetype: Option<Filetype>,
}

/// Ordered, sectioned list of selectable filetypes plus the MRU/custom list.
pub struct FiletypeCatalog {
    recent: Vec<Filetype>,
    primary: Vec<Filetype>,
    secondary: Vec<Filetype>,
    items: Vec<CatalogItem>,
    items_dirty: bool,
    recent_path: PathBuf,
}

impl FiletypeCatalog {
    /// Builds the catalog from the static language table and the persisted
    /// recent list at `recent_path`. A missing or malformed recent file
    /// loads as an empty list.
    pub fn new(recent_path: PathBuf) -> Self {
        let (primary, secondary) = load_builtins();
        let recent = load_recent(&recent_path);
        let mut catalog = Self {
            recent,
            primary,
            secondary,
            items: Vec::new(),
            items_dirty: false,
            recent_path,
        };
        catalog.prepare_items();
        catalog
    }

    /// The MRU/custom list, head first.
    pub fn recent(&self) -> &[Filetype] {
        &self.recent
    }

    /// Prompts the user to pick a filetype. The selection is promoted to the
    /// head of the recent list and persisted. Returns `None` on dismissal.
    pub fn select_filetype(
        &mut self,
        ui: &dyn UserInterface,
        placeholder: Option<&str>,
    ) -> Result<Option<Filetype>> {
        self.prepare_items();
        let entries: Vec<PickEntry> = self.items.iter().map(|item| item.entry.clone()).collect();

        let Some(index) = ui.pick(placeholder.unwrap_or("Select filetype"), &entries) else {
            return Ok(None);
        };
        let Some(filetype) = self.items.get(index).and_then(|item| item.filetype.clone()) else {
            return Ok(None);
        };

        self.mark_recent(&filetype)?;
        Ok(Some(filetype))
    }

    /// Prompts for a new custom filetype. A duplicate extension (built-in or
    /// recent) is a validation failure reported through the UI with no state
    /// mutated. On success the new type becomes the recent head.
    pub fn add_custom_type(&mut self, ui: &dyn UserInterface) -> Result<Option<Filetype>> {
        let Some(raw) = ui.input(&InputOptions::new("Enter file extension")) else {
            return Ok(None);
        };
        let ext = sanitize_input(&raw, false);
        if ext.is_empty() {
            return Ok(None);
        }
        // Same single-dot invariant as the built-in catalog.
        if normalize_extension(&ext).contains('.') {
            ui.info(&format!("Invalid extension ({ext}). Use a single extension without dots"));
            return Ok(None);
        }

        if let Some(existing) = self.find(&ext) {
            ui.info(&format!("Extension already exists ({})", existing.name));
            return Ok(None);
        }

        let default_name = normalize_extension(&ext).to_uppercase();
        let Some(raw_name) = ui.input(
            &InputOptions::new(format!(
                "Enter filetype's name (Hit enter for '{default_name}')"
            ))
            .allow_spaces(),
        ) else {
            return Ok(None);
        };
        let name = match sanitize_input(&raw_name, true) {
            name if name.is_empty() => default_name,
            name => name,
        };

        let filetype = Filetype {
            name,
            ext: format!(".{}", normalize_extension(&ext)),
        };
        self.mark_recent(&filetype)?;
        Ok(Some(filetype))
    }

    /// Offers removal of true custom types: recent entries whose extension
    /// matches no built-in. Built-in types can never be removed.
    pub fn remove_custom_type(&mut self, ui: &dyn UserInterface) -> Result<()> {
        let customs: Vec<Filetype> = self
            .recent
            .iter()
            .filter(|filetype| !self.is_builtin(&filetype.ext))
            .cloned()
            .collect();

        if customs.is_empty() {
            ui.info("No custom filetypes to remove");
            return Ok(());
        }

        let entries: Vec<PickEntry> = customs
            .iter()
            .map(|filetype| PickEntry::Item(filetype.label()))
            .collect();
        let Some(index) = ui.pick("Select a custom filetype to remove", &entries) else {
            return Ok(());
        };
        let removed = customs[index].clone();

        let key = normalize_extension(&removed.ext);
        self.recent
            .retain(|filetype| normalize_extension(&filetype.ext) != key);
        self.persist_recent()?;
        self.items_dirty = true;

        ui.info(&format!("Removed custom filetype {}", removed.ext));
        Ok(())
    }

    /// Looks a filetype up by extension anywhere in the merged catalog.
    pub fn find(&self, ext: &str) -> Option<&Filetype> {
        let key = normalize_extension(ext);
        self.recent
            .iter()
            .chain(self.primary.iter())
            .chain(self.secondary.iter())
            .find(|filetype| normalize_extension(&filetype.ext) == key)
    }

    /// Resolves the configured default extension against the catalog.
    pub fn default_filetype(&self, configured: Option<&str>) -> Option<Filetype> {
        configured.and_then(|ext| self.find(ext)).cloned()
    }

    fn is_builtin(&self, ext: &str) -> bool {
        let key = normalize_extension(ext);
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .any(|filetype| normalize_extension(&filetype.ext) == key)
    }

    /// Moves the filetype to the head of the recent list and persists.
    /// A no-op when it is already the head.
    fn mark_recent(&mut self, filetype: &Filetype) -> Result<()> {
        let key = normalize_extension(&filetype.ext);
        if let Some(head) = self.recent.first() {
            if normalize_extension(&head.ext) == key {
                return Ok(());
            }
        }

        let mut updated: Vec<Filetype> = self
            .recent
            .iter()
            .filter(|existing| normalize_extension(&existing.ext) != key)
            .cloned()
            .collect();
        updated.insert(0, filetype.clone());
        self.recent = updated;

        self.persist_recent()?;
        self.items_dirty = true;
        Ok(())
    }

    /// Rebuilds the sectioned picker items, but only when the recent list
    /// changed since the last build.
    fn prepare_items(&mut self) {
        if !self.items.is_empty() && !self.items_dirty {
            return;
        }
        debug!(recent = self.recent.len(), "rebuilding filetype picker items");

        self.items.clear();
        let recent = self.recent.clone();
        self.push_section("Recent", &recent);

        let builtins: Vec<Filetype> = self
            .primary
            .iter()
            .chain(self.secondary.iter())
            .filter(|filetype| {
                let key = normalize_extension(&filetype.ext);
                !recent
                    .iter()
                    .any(|recent| normalize_extension(&recent.ext) == key)
            })
            .cloned()
            .collect();
        self.push_section("File types", &builtins);

        self.items_dirty = false;
    }

    fn push_section(&mut self, title: &str, filetypes: &[Filetype]) {
        self.items.push(CatalogItem {
            entry: PickEntry::Separator(title.to_string()),
            filetype: None,
        });
        for filetype in filetypes {
            self.items.push(CatalogItem {
                entry: PickEntry::Item(filetype.label()),
                filetype: Some(filetype.clone()),
            });
        }
    }

    fn persist_recent(&self) -> Result<()> {
        if let Some(parent) = self.recent_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed creating directory {:?}", parent))?;
        }
        let data = serde_json::to_vec_pretty(&self.recent)?;
        fs::write(&self.recent_path, data)
            .with_context(|| format!("Failed writing recent filetypes {:?}", self.recent_path))?;
        Ok(())
    }
}

/// Splits the language table into the primary set (one canonical extension
/// per language) and the secondary set (remaining single-dot extensions,
/// de-duplicated, named after the extension itself). Both are sorted
/// case-insensitively by display name.
fn load_builtins() -> (Vec<Filetype>, Vec<Filetype>) {
    let mut primary = Vec::new();
    let mut secondary: Vec<Filetype> = Vec::new();

    for (language, extensions) in LANGUAGES {
        let Some((first, rest)) = extensions.split_first() else {
            continue;
        };
        primary.push(Filetype {
            name: language.to_string(),
            ext: first.to_string(),
        });

        for ext in rest {
            // Compound extensions (.rest.txt) break suffix matching.
            if ext[1..].contains('.') {
                continue;
            }
            secondary.push(Filetype {
                name: ext[1..].to_uppercase(),
                ext: ext.to_string(),
            });
        }
    }

    let mut deduped: Vec<Filetype> = Vec::with_capacity(secondary.len());
    for candidate in secondary {
        let key = normalize_extension(&candidate.ext);
        let claimed = primary
            .iter()
            .chain(deduped.iter())
            .any(|filetype| normalize_extension(&filetype.ext) == key);
        if !claimed {
            deduped.push(candidate);
        }
    }

    primary.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    deduped.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    (primary, deduped)
}

fn load_recent(path: &Path) -> Vec<Filetype> {
    if !path.exists() {
        return Vec::new();
    }
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read recent filetypes; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_slice(&data) {
        Ok(recent) => recent,
        Err(err) => {
            warn!(path = %path.display(), %err, "malformed recent filetypes; starting empty");
            Vec::new()
        }
    }
}
