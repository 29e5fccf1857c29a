//! Validated filesystem operations scoped to the scratch directory.
//!
//! The filesystem is the source of truth: scratchpad entries are derived on
//! demand from a directory listing plus stat, never persisted separately.

use crate::allocator::allocate;
use crate::paths::ScratchPaths;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One scratch file, derived from a directory listing.
#[derive(Debug, Clone)]
pub struct ScratchpadFile {
    pub name: String,
    pub path: PathBuf,
    pub modified_at: DateTime<Utc>,
    pub size_bytes: u64,
}

/// Listing order for scratchpad files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Date,
    /// Extension first, name as tiebreaker.
    Type,
}

/// Thin CRUD layer over the resolved scratch directory.
pub struct ScratchpadStore {
    dir: PathBuf,
    custom_root: Option<PathBuf>,
}

impl ScratchpadStore {
    pub fn new(paths: &ScratchPaths) -> Self {
        Self {
            dir: paths.project_dir.clone(),
            custom_root: paths.custom_root.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lazily creates the scratch directory. A path with no existing
    /// ancestor at all is a configuration error, reported with the
    /// configured custom root so the user knows what to fix.
    pub fn ensure_dir(&self) -> Result<()> {
        if self.dir.exists() {
            return Ok(());
        }
        if !folder_creatable(&self.dir) {
            let shown = self
                .custom_root
                .as_deref()
                .unwrap_or(self.dir.as_path());
            bail!(
                "Invalid scratchpads path ({}). Check the scratchpads_folder configuration",
                shown.display()
            );
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed creating scratch directory {:?}", self.dir))?;
        Ok(())
    }

    /// File names in the scratch directory, sorted. A missing directory
    /// lists as empty.
    pub fn file_names(&self) -> Result<Vec<String>> {
        Ok(self
            .list(SortKey::Name, true)?
            .into_iter()
            .map(|file| file.name)
            .collect())
    }

    /// All scratch files with their stats, in the requested order.
    pub fn list(&self, key: SortKey, ascending: bool) -> Result<Vec<ScratchpadFile>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed reading scratch directory {:?}", self.dir))?
        {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            files.push(ScratchpadFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                modified_at: DateTime::<Utc>::from(
                    metadata.modified().unwrap_or(std::time::UNIX_EPOCH),
                ),
                size_bytes: metadata.len(),
            });
        }
        sort_files(&mut files, key, ascending);
        Ok(files)
    }

    /// The most recently modified scratch file, if any.
    pub fn latest(&self) -> Result<Option<ScratchpadFile>> {
        Ok(self.list(SortKey::Date, false)?.into_iter().next())
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Allocates a free name and writes the new scratch file. The existence
    /// check and the write are not atomic; the directory is not locked, so a
    /// concurrent creator of the same path wins last-writer.
    pub fn create(&self, base: &str, ext: &str, contents: &str) -> Result<PathBuf> {
        let name = allocate(&self.file_names()?, base, ext);
        let path = self.path_for(&name);
        debug!(path = %path.display(), "creating scratchpad");
        fs::write(&path, contents)
            .with_context(|| format!("Failed writing scratchpad {:?}", path))?;
        Ok(path)
    }

    /// Renames a scratch file, replacing the target if it exists. Overwrite
    /// confirmation is the caller's responsibility. The target is deleted
    /// first; `fs::rename` onto an existing file only succeeds on Unix.
    pub fn rename(&self, from: &str, to: &str) -> Result<PathBuf> {
        let source = self.path_for(from);
        let target = self.path_for(to);
        if target.exists() {
            fs::remove_file(&target)
                .with_context(|| format!("Failed replacing {:?}", target))?;
        }
        fs::rename(&source, &target)
            .with_context(|| format!("Failed renaming {:?} to {:?}", source, target))?;
        Ok(target)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        fs::remove_file(&path).with_context(|| format!("Failed removing {:?}", path))?;
        Ok(())
    }

    /// Deletes every scratch file in the directory; returns the count.
    pub fn remove_all(&self) -> Result<usize> {
        let files = self.list(SortKey::Name, true)?;
        for file in &files {
            fs::remove_file(&file.path)
                .with_context(|| format!("Failed removing {:?}", file.path))?;
        }
        debug!(count = files.len(), "removed all scratchpads");
        Ok(files.len())
    }
}

fn sort_files(files: &mut [ScratchpadFile], key: SortKey, ascending: bool) {
    files.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Date => a.modified_at.cmp(&b.modified_at),
            SortKey::Type => extension_of(&a.name)
                .cmp(&extension_of(&b.name))
                .then_with(|| a.name.cmp(&b.name)),
        };
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn extension_of(name: &str) -> &str {
    name.rfind('.').map(|idx| &name[idx..]).unwrap_or("")
}

/// Walks up the path looking for the first existing ancestor, stopping
/// short of the filesystem root.
fn folder_creatable(path: &Path) -> bool {
    path.ancestors()
        .filter(|ancestor| ancestor.parent().is_some())
        .any(|ancestor| ancestor.exists())
}

/// Human-readable size: `format_size(1536)` is `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[exponent])
    } else {
        format!("{:.1} {}", rounded, UNITS[exponent])
    }
}
