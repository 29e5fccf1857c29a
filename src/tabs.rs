//! Reconciliation of open editor tabs with scratch files.
//!
//! Before a scratch file is deleted or renamed, every tab showing it must be
//! closed. When the host can enumerate open tabs this is a simple filter.
//! Hosts that only expose "the active document" plus close/advance commands
//! get the cycle-and-probe fallback: close the active document while it is a
//! scratch document, anchor on the first one that is not, then walk the tab
//! ring closing scratch documents until the anchor comes around again. The
//! host updates its active-document pointer asynchronously, so every close
//! and advance is followed by a settle delay.

use crate::host::EditorHost;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Pause after closing or changing the active tab.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Upper bound on cycle steps; a host that never reaches the anchor again
/// would otherwise spin forever.
const MAX_CYCLE_STEPS: usize = 512;

pub struct TabCoordinator<'a> {
    editor: &'a dyn EditorHost,
    settle: Duration,
}

impl<'a> TabCoordinator<'a> {
    pub fn new(editor: &'a dyn EditorHost) -> Self {
        Self::with_settle(editor, SETTLE_DELAY)
    }

    /// Tests pass `Duration::ZERO`.
    pub fn with_settle(editor: &'a dyn EditorHost, settle: Duration) -> Self {
        Self { editor, settle }
    }

    /// Closes every tab showing a file under the scratch directory.
    pub fn close_all_scratch_tabs(&self, scratch_dir: &Path) -> Result<()> {
        self.close_matching(&|path: &Path| path.parent() == Some(scratch_dir))
    }

    /// Closes every tab showing exactly the given file. A path with no open
    /// tab completes without error and performs zero close actions.
    pub fn close_tabs_for_path(&self, target: &Path) -> Result<()> {
        self.close_matching(&|path: &Path| path == target)
    }

    /// Looks for an open editor on the given path. Without tab enumeration
    /// only the active document can be probed.
    pub fn find_open_editor(&self, target: &Path) -> Option<PathBuf> {
        match self.editor.open_tabs() {
            Some(tabs) => tabs.into_iter().find(|path| path == target),
            None => match self.editor.active_document() {
                Ok(Some(active)) if active == target => Some(active),
                _ => None,
            },
        }
    }

    fn close_matching(&self, is_target: &dyn Fn(&Path) -> bool) -> Result<()> {
        if let Some(tabs) = self.editor.open_tabs() {
            for tab in tabs.iter().filter(|path| is_target(path)) {
                self.editor.close_tab(tab)?;
            }
            return Ok(());
        }
        self.cycle_and_close(is_target);
        Ok(())
    }

    /// Indirect strategy. Host failures and a vanished active document both
    /// mean "no more open tabs": log and stop, never fail the operation.
    fn cycle_and_close(&self, is_target: &dyn Fn(&Path) -> bool) {
        let mut steps = 0usize;

        // Close the active document while it is a target; the first
        // non-target active document becomes the anchor.
        let anchor = loop {
            if !self.budget(&mut steps) {
                return;
            }
            match self.editor.active_document() {
                Ok(Some(active)) if is_target(&active) => {
                    if !self.close_active() {
                        return;
                    }
                }
                Ok(Some(active)) => break active,
                Ok(None) => return,
                Err(err) => {
                    warn!(%err, "active document probe failed; assuming no open tabs");
                    return;
                }
            }
        };
        debug!(anchor = %anchor.display(), "cycling tab ring");

        // Walk the ring. The anchor is never closed, so reaching it again
        // means full coverage.
        loop {
            if !self.budget(&mut steps) {
                return;
            }
            if self.editor.next_document().is_err() {
                warn!("advancing to next document failed; stopping cycle");
                return;
            }
            self.pause();

            loop {
                let active = match self.editor.active_document() {
                    Ok(Some(active)) => active,
                    Ok(None) => return,
                    Err(err) => {
                        warn!(%err, "active document probe failed; stopping cycle");
                        return;
                    }
                };
                if active == anchor {
                    return;
                }
                if !is_target(&active) {
                    break;
                }
                if !self.budget(&mut steps) || !self.close_active() {
                    return;
                }
            }
        }
    }

    fn close_active(&self) -> bool {
        if let Err(err) = self.editor.close_active_document() {
            warn!(%err, "closing active document failed; stopping cycle");
            return false;
        }
        self.pause();
        true
    }

    fn budget(&self, steps: &mut usize) -> bool {
        *steps += 1;
        if *steps > MAX_CYCLE_STEPS {
            warn!("tab cycle exceeded {MAX_CYCLE_STEPS} steps; stopping");
            return false;
        }
        true
    }

    fn pause(&self) {
        if !self.settle.is_zero() {
            thread::sleep(self.settle);
        }
    }
}
