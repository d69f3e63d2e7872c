//! Workspace persistence: snapshot, codec and load policy over a [`KeyValueStore`].
//!
//! Only tab and folder records are written. Drag state, menus, rename mode
//! and file handles never reach the store.

use serde::Deserialize;

use crate::kernel::scheduler::{DebounceTimer, Transient};
use crate::kernel::services::ports::{KeyValueStore, StoreError};
use crate::kernel::workspace::{Folder, Tab, Workspace};
use crate::models::{TabId, Theme};

pub const TABS_KEY: &str = "notepad-tabs";
pub const FOLDERS_KEY: &str = "notepad-folders";
pub const THEME_KEY: &str = "theme";

/// What a save covered, so the acknowledgement only clears what was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    pub tab_versions: Vec<(TabId, u64)>,
    pub layout_version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    pub tabs_json: String,
    pub folders_json: String,
    pub ticket: SaveTicket,
}

pub fn snapshot(workspace: &Workspace) -> Result<WorkspaceSnapshot, serde_json::Error> {
    Ok(WorkspaceSnapshot {
        tabs_json: serde_json::to_string(workspace.tabs())?,
        folders_json: serde_json::to_string(workspace.folders())?,
        ticket: SaveTicket {
            tab_versions: workspace
                .tabs()
                .iter()
                .map(|tab| (tab.id, tab.edit_version))
                .collect(),
            layout_version: workspace.layout_version(),
        },
    })
}

pub fn write_snapshot(
    store: &mut dyn KeyValueStore,
    snapshot: &WorkspaceSnapshot,
) -> Result<(), StoreError> {
    store.set(TABS_KEY, &snapshot.tabs_json)?;
    store.set(FOLDERS_KEY, &snapshot.folders_json)?;
    Ok(())
}

/// Folder list tolerant of single broken records.
#[derive(Deserialize)]
#[serde(transparent)]
struct LenientList<T>(Vec<LenientItem<T>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientItem<T> {
    Valid(T),
    Invalid(serde::de::IgnoredAny),
}

impl<T> LenientList<T> {
    fn into_valid(self) -> Vec<T> {
        self.0
            .into_iter()
            .filter_map(|item| match item {
                LenientItem::Valid(value) => Some(value),
                LenientItem::Invalid(_) => None,
            })
            .collect()
    }
}

/// Decodes stored records.
///
/// Returns `Ok(None)` when no tab list was ever stored. A malformed tab list
/// is an error; a malformed folder list only loses the broken folders.
pub fn decode(
    tabs_json: Option<&str>,
    folders_json: Option<&str>,
) -> Result<Option<Workspace>, serde_json::Error> {
    let Some(tabs_json) = tabs_json else {
        return Ok(None);
    };
    let tabs: Vec<Tab> = serde_json::from_str(tabs_json)?;

    let folders = match folders_json {
        Some(json) => match serde_json::from_str::<LenientList<Folder>>(json) {
            Ok(list) => list.into_valid(),
            Err(e) => {
                tracing::warn!(error = %e, "stored folders unreadable, dropping them");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    Ok(Some(Workspace::from_parts(tabs, folders)))
}

/// Loads the workspace, falling back to a fresh one-tab workspace when
/// nothing is stored or the stored data cannot be read.
pub fn load(store: &dyn KeyValueStore) -> Workspace {
    let tabs = match store.get(TABS_KEY) {
        Ok(tabs) => tabs,
        Err(e) => {
            tracing::error!(error = %e, "failed to read stored tabs");
            return Workspace::with_default_tab();
        }
    };
    let folders = store.get(FOLDERS_KEY).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to read stored folders");
        None
    });

    match decode(tabs.as_deref(), folders.as_deref()) {
        Ok(Some(workspace)) => {
            tracing::info!(
                tabs = workspace.tabs().len(),
                folders = workspace.folders().len(),
                "workspace loaded"
            );
            workspace
        }
        Ok(None) => Workspace::with_default_tab(),
        Err(e) => {
            tracing::warn!(error = %e, "stored tabs are corrupt, starting fresh");
            Workspace::with_default_tab()
        }
    }
}

pub fn load_theme(store: &dyn KeyValueStore) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Ok(value) => value.as_deref().and_then(Theme::parse),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored theme");
            None
        }
    }
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saving,
    Saved,
    Failed,
}

/// Autosave debounce plus the save-status indicator.
#[derive(Debug)]
pub struct AutosaveState {
    pub timer: DebounceTimer,
    pub status: Transient<SaveStatus>,
    /// Snapshot handed to the host and not yet acknowledged.
    pub pending: Option<SaveTicket>,
}

impl AutosaveState {
    pub fn new(delay: std::time::Duration) -> Self {
        Self {
            timer: DebounceTimer::new(delay),
            status: Transient::empty(),
            pending: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/persistence.rs"]
mod tests;
