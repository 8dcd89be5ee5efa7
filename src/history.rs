//! Generation history with undo/redo.
//!
//! DESIGN
//! ======
//! A linear log of generation results plus a cursor. Each successful
//! generation pushes a new entry; pushing while rewound truncates the
//! abandoned future first, so redo never resurrects entries from a
//! divergent branch. Manual editor changes mutate the entry at the cursor
//! in place and never create a new undo step.
//!
//! Persistence is best-effort: the whole state is one JSON blob under a
//! well-known key, loaded tolerantly (a corrupt or missing blob falls back
//! to a fresh state) and saved without surfacing I/O errors to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key under which the project blob is persisted.
pub const STORAGE_KEY: &str = "uiforge_project";

const PLACEHOLDER_CODE: &str = "// Generated code will appear here";
const PLACEHOLDER_EXPLANATION: &str = "Wait for generation to see explanation...";

// =============================================================================
// TYPES
// =============================================================================

/// One generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The content region shown in the editor.
    pub editable_code: String,
    /// The full assembled artifact, when one exists.
    #[serde(default)]
    pub preview_code: Option<String>,
    pub explanation: String,
}

/// The full undo/redo state. Invariant: `entries` is never empty and
/// `cursor < entries.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            entries: vec![HistoryEntry {
                editable_code: PLACEHOLDER_CODE.to_string(),
                preview_code: None,
                explanation: PLACEHOLDER_EXPLANATION.to_string(),
            }],
            cursor: 0,
        }
    }
}

// =============================================================================
// TRANSITIONS
// =============================================================================

impl HistoryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry at the cursor.
    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a new entry, discarding any rewound-past future first, and
    /// move the cursor to it.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back one entry. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward one entry. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Overwrite the editable code of the current entry in place. Manual
    /// edits never create an undo step.
    pub fn edit_current(&mut self, editable_code: &str) {
        self.entries[self.cursor].editable_code = editable_code.to_string();
    }

    /// Wholesale overwrite, used for rehydration. An empty entry list is
    /// rejected in favor of a fresh state; an out-of-range cursor is clamped.
    pub fn replace(&mut self, other: Self) {
        if other.entries.is_empty() {
            *self = Self::default();
            return;
        }
        self.cursor = other.cursor.min(other.entries.len() - 1);
        self.entries = other.entries;
    }

    /// Whether this is still the untouched initial state.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.entries.len() == 1 && self.entries[0].editable_code == PLACEHOLDER_CODE
    }

    // =========================================================================
    // PERSISTENCE
    // =========================================================================

    fn blob_path(dir: &Path) -> PathBuf {
        dir.join(format!("{STORAGE_KEY}.json"))
    }

    /// Load the persisted state from `dir`, falling back to a fresh state
    /// when the blob is missing, unreadable, or structurally invalid.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let path = Self::blob_path(dir);
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(&raw) {
            Ok(state) if !state.entries.is_empty() => Self {
                // Tolerate a cursor past the end from a truncated write.
                cursor: state.cursor.min(state.entries.len() - 1),
                entries: state.entries,
            },
            Ok(_) => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "discarding corrupt history blob");
                Self::default()
            }
        }
    }

    /// Persist the state to `dir`. Pristine states are not written; I/O
    /// failures are logged and swallowed.
    pub fn save(&self, dir: &Path) {
        if self.is_pristine() {
            return;
        }
        let path = Self::blob_path(dir);
        let payload = match serde_json::to_string(self) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = fs::write(&path, payload) {
            warn!(path = %path.display(), error = %e, "failed to persist history");
        }
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
