//! Workspace model: the ordered tab list, the flat folder list and the active tab.
//!
//! Every mutator is total. Looking up an id that is gone short-circuits to
//! `false` ("nothing changed"), because stale ids arrive routinely from UI
//! events that were queued before the entity disappeared.

pub mod model;
pub mod naming;

use crate::kernel::language::LanguageId;
use crate::models::{FileHandle, FolderId, IdAllocator, TabId};

pub use model::{Folder, Tab};

#[derive(Debug, Clone)]
pub struct Workspace {
    tabs: Vec<Tab>,
    folders: Vec<Folder>,
    active: Option<TabId>,
    tab_ids: IdAllocator,
    folder_ids: IdAllocator,
    layout_version: u64,
    saved_layout_version: u64,
    /// Bumped by every mutation of tabs or folders.
    revision: u64,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            folders: Vec::new(),
            active: None,
            tab_ids: IdAllocator::new(),
            folder_ids: IdAllocator::new(),
            layout_version: 0,
            saved_layout_version: 0,
            revision: 0,
        }
    }

    /// Fresh workspace holding one empty, unmodified plain-text tab.
    pub fn with_default_tab() -> Self {
        let mut workspace = Self::new();
        workspace.create_tab();
        workspace.saved_layout_version = workspace.layout_version;
        workspace
    }

    /// Rebuilds a workspace from stored records.
    ///
    /// Every loaded id is observed before any is handed out again, so a
    /// record whose id repeats an earlier one keeps its content under a
    /// fresh id. Dangling folder references are cleared.
    pub fn from_parts(tabs: Vec<Tab>, folders: Vec<Folder>) -> Self {
        let mut workspace = Self::new();
        for folder in &folders {
            workspace.folder_ids.observe(folder.id.raw());
        }
        for tab in &tabs {
            workspace.tab_ids.observe(tab.id.raw());
        }

        for mut folder in folders {
            if workspace.folder(folder.id).is_some() {
                let fresh = FolderId::new(workspace.folder_ids.next_raw());
                tracing::warn!(
                    folder = folder.id.raw(),
                    reassigned = fresh.raw(),
                    "duplicate folder id in stored data"
                );
                folder.id = fresh;
            }
            workspace.folders.push(folder);
        }

        for mut tab in tabs {
            if workspace.tab(tab.id).is_some() {
                let fresh = TabId::new(workspace.tab_ids.next_raw());
                tracing::warn!(
                    tab = tab.id.raw(),
                    reassigned = fresh.raw(),
                    "duplicate tab id in stored data"
                );
                tab.id = fresh;
            }
            if let Some(folder_id) = tab.folder_id {
                if workspace.folder(folder_id).is_none() {
                    tab.folder_id = None;
                }
            }
            tab.is_modified = false;
            workspace.tabs.push(tab);
        }

        workspace.active = workspace.tabs.first().map(|tab| tab.id);
        workspace
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub(crate) fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    pub fn tab_index(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    fn folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|folder| folder.id == id)
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.tab(id))
    }

    /// Tabs grouped under `folder`, or the root tabs for `None`, in tab order.
    pub fn tabs_in(&self, folder: Option<FolderId>) -> impl Iterator<Item = &Tab> {
        self.tabs.iter().filter(move |tab| tab.folder_id == folder)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.layout_version != self.saved_layout_version || self.tabs.iter().any(|t| t.is_modified)
    }

    pub fn layout_version(&self) -> u64 {
        self.layout_version
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_layout(&mut self) {
        self.layout_version = self.layout_version.wrapping_add(1);
        self.note_edit();
    }

    pub(crate) fn note_edit(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Acknowledges a successful save of the given snapshot.
    ///
    /// Tabs edited after the snapshot was taken stay modified.
    pub fn mark_saved(&mut self, tab_versions: &[(TabId, u64)], layout_version: u64) -> bool {
        let mut changed = false;
        for &(id, version) in tab_versions {
            if let Some(tab) = self.tab_mut(id) {
                if tab.edit_version == version && tab.is_modified {
                    tab.is_modified = false;
                    changed = true;
                }
            }
        }
        if self.layout_version == layout_version {
            self.saved_layout_version = layout_version;
        }
        changed
    }

    pub fn create_tab(&mut self) -> TabId {
        let raw = self.tab_ids.next_raw();
        let id = TabId::new(raw);
        self.tabs.push(Tab::new(id, naming::placeholder_tab_name(raw)));
        self.active = Some(id);
        self.bump_layout();
        tracing::debug!(tab_id = raw, "tab created");
        id
    }

    /// Adds a tab for a document read from elsewhere (a file, an import).
    pub fn open_document(
        &mut self,
        name: String,
        content: String,
        language: LanguageId,
        origin: Option<FileHandle>,
    ) -> TabId {
        let id = TabId::new(self.tab_ids.next_raw());
        let mut tab = Tab::new(id, name);
        tab.content = content;
        tab.language = language;
        tab.origin = origin;
        self.tabs.push(tab);
        self.active = Some(id);
        self.bump_layout();
        id
    }

    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.active == Some(id) || self.tab(id).is_none() {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn activate_next(&mut self) -> bool {
        self.activate_offset(1)
    }

    pub fn activate_prev(&mut self) -> bool {
        self.activate_offset(-1)
    }

    fn activate_offset(&mut self, delta: isize) -> bool {
        let len = self.tabs.len();
        if len <= 1 {
            return false;
        }
        let current = self
            .active
            .and_then(|id| self.tab_index(id))
            .unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        self.set_active(self.tabs[next].id)
    }

    /// Removes a tab. An active tab hands activation to whichever tab now
    /// sits at its old position, clamped to the last index.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.tab_index(id) else {
            return false;
        };
        self.tabs.remove(index);
        if self.active == Some(id) {
            self.active = if self.tabs.is_empty() {
                None
            } else {
                Some(self.tabs[index.min(self.tabs.len() - 1)].id)
            };
        }
        self.bump_layout();
        tracing::debug!(tab_id = id.raw(), remaining = self.tabs.len(), "tab closed");
        true
    }

    /// Context-menu flavour of [`Workspace::close_tab`]; same outcome.
    pub fn delete_tab(&mut self, id: TabId) -> bool {
        self.close_tab(id)
    }

    pub fn rename_tab(&mut self, id: TabId, new_name: &str) -> bool {
        let name = new_name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if tab.name == name {
            return false;
        }
        tab.name = name.to_string();
        tab.touch();
        self.bump_layout();
        true
    }

    pub fn set_tab_language(&mut self, id: TabId, language: LanguageId) -> bool {
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if tab.language == language {
            return false;
        }
        tab.language = language;
        self.bump_layout();
        true
    }

    /// String-keyed variant; unknown ids select plain text.
    pub fn set_tab_language_id(&mut self, id: TabId, language_id: &str) -> bool {
        self.set_tab_language(id, LanguageId::from_id_or_plaintext(language_id))
    }

    pub fn create_folder(&mut self) -> FolderId {
        let raw = self.folder_ids.next_raw();
        self.push_folder(raw, naming::default_folder_name(raw))
    }

    pub fn create_folder_named(&mut self, name: &str) -> FolderId {
        let raw = self.folder_ids.next_raw();
        let name = match name.trim() {
            "" => naming::default_folder_name(raw),
            trimmed => trimmed.to_string(),
        };
        self.push_folder(raw, name)
    }

    fn push_folder(&mut self, raw: u64, name: String) -> FolderId {
        let id = FolderId::new(raw);
        self.folders.push(Folder::new(id, name));
        self.bump_layout();
        id
    }

    pub fn rename_folder(&mut self, id: FolderId, new_name: &str) -> bool {
        let name = new_name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(folder) = self.folder_mut(id) else {
            return false;
        };
        if folder.name == name {
            return false;
        }
        folder.name = name.to_string();
        self.bump_layout();
        true
    }

    pub fn toggle_folder(&mut self, id: FolderId) -> bool {
        let Some(folder) = self.folder_mut(id) else {
            return false;
        };
        folder.is_expanded = !folder.is_expanded;
        self.bump_layout();
        true
    }

    /// Removes a folder and moves its tabs to the root in the same step.
    pub fn delete_folder(&mut self, id: FolderId) -> bool {
        let Some(index) = self.folders.iter().position(|f| f.id == id) else {
            return false;
        };
        for tab in self.tabs.iter_mut().filter(|t| t.folder_id == Some(id)) {
            tab.folder_id = None;
        }
        self.folders.remove(index);
        self.bump_layout();
        tracing::debug!(folder_id = id.raw(), "folder deleted");
        true
    }

    pub fn folder_tab_count(&self, id: FolderId) -> usize {
        self.tabs_in(Some(id)).count()
    }

    pub fn move_tab_to_folder(&mut self, tab_id: TabId, folder: Option<FolderId>) -> bool {
        if let Some(folder_id) = folder {
            if self.folder(folder_id).is_none() {
                return false;
            }
        }
        let Some(tab) = self.tab_mut(tab_id) else {
            return false;
        };
        if tab.folder_id == folder {
            return false;
        }
        tab.folder_id = folder;
        self.bump_layout();
        true
    }

    /// Moves `dragged` to `target`'s slot and into `target`'s folder.
    pub fn reorder_tab(&mut self, dragged: TabId, target: TabId) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.tab_index(dragged), self.tab_index(target)) else {
            return false;
        };
        let target_folder = self.tabs[to].folder_id;
        let mut tab = self.tabs.remove(from);
        tab.folder_id = target_folder;
        self.tabs.insert(to, tab);
        self.bump_layout();
        true
    }

    pub fn reorder_folder(&mut self, dragged: FolderId, target: FolderId) -> bool {
        if dragged == target {
            return false;
        }
        let from = self.folders.iter().position(|f| f.id == dragged);
        let to = self.folders.iter().position(|f| f.id == target);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        let folder = self.folders.remove(from);
        self.folders.insert(to, folder);
        self.bump_layout();
        true
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
