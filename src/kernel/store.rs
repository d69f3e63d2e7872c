use std::sync::Arc;

use crate::kernel::context_menu::ContextMenuTarget;
use crate::kernel::dnd::{DragPayload, DropIntent};
use crate::kernel::editor::{Projection, ProjectionCache};
use crate::kernel::export;
use crate::kernel::language::LanguageId;
use crate::kernel::scheduler::Clock;
use crate::kernel::services::ports::OpenedFile;
use crate::models::FolderId;

use super::{Action, AppState, Effect};

mod commands;
mod lifecycle;
mod sidebar;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
    clock: Arc<dyn Clock>,
    projection: ProjectionCache,
}

impl Store {
    pub fn new(state: AppState, clock: Arc<dyn Clock>) -> Self {
        Self {
            state,
            clock,
            projection: ProjectionCache::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_write_back(&mut self, enabled: bool) {
        self.state.write_back = enabled;
    }

    /// Highlight overlay for the active tab, recomputed only when it changed.
    pub fn active_projection(&mut self) -> Option<&Projection> {
        let tab = self.state.workspace.active_tab()?;
        Some(self.projection.get_or_project(
            tab.id,
            tab.edit_version,
            tab.language,
            &tab.content,
        ))
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let revision = self.state.workspace.revision();
        let active = self.state.workspace.active_tab_id();

        let mut result = self.reduce(action);

        if self.state.workspace.active_tab_id() != active {
            self.state.ui.selection = (0, 0);
            self.state.ui.language_menu_open = false;
            result.state_changed = true;
        }
        if self.state.workspace.revision() != revision {
            self.after_workspace_change();
            result.state_changed = true;
        }
        result
    }

    fn reduce(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Tick => self.tick(),
            Action::Flush => self.flush(),
            Action::UpdateContent(text) => {
                let max_len = self.state.config.auto_name_max_len;
                DispatchResult::changed(self.state.workspace.update_content(&text, max_len))
            }
            Action::SetSelection { start, end } => {
                let selection = (start, end);
                let changed = self.state.ui.selection != selection;
                self.state.ui.selection = selection;
                DispatchResult::changed(changed)
            }
            Action::ActivateTab(id) => DispatchResult::changed(self.state.workspace.set_active(id)),
            Action::CloseTab(id) => DispatchResult::changed(self.state.workspace.close_tab(id)),
            Action::RenameTab { id, name } => {
                DispatchResult::changed(self.state.workspace.rename_tab(id, &name))
            }
            Action::ToggleLanguageMenu => {
                if self.state.workspace.active_tab_id().is_none() {
                    return DispatchResult::changed(false);
                }
                self.state.ui.language_menu_open = !self.state.ui.language_menu_open;
                DispatchResult::changed(true)
            }
            Action::SetLanguage(language) => self.set_active_language(language),
            Action::ToggleFolder(id) => {
                DispatchResult::changed(self.state.workspace.toggle_folder(id))
            }
            Action::RenameFolder { id, name } => {
                DispatchResult::changed(self.state.workspace.rename_folder(id, &name))
            }
            Action::DeleteFolder(id) => {
                DispatchResult::changed(self.state.workspace.delete_folder(id))
            }
            Action::MoveTabToFolder { tab, folder } => {
                DispatchResult::changed(self.state.workspace.move_tab_to_folder(tab, folder))
            }
            Action::ExportFolder(id) => self.export_folder(id),

            Action::DragStart(payload) => self.drag_start(payload),
            Action::DragEnter(target) => DispatchResult::changed(self.state.ui.drag.enter(target)),
            Action::DragLeave(target) => DispatchResult::changed(self.state.ui.drag.leave(target)),
            Action::Drop(target) => {
                let was_dragging = self.state.ui.drag.is_dragging();
                let intent = self.state.ui.drag.drop_on(target);
                let applied = intent.is_some_and(|intent| self.apply_drop(intent));
                DispatchResult::changed(was_dragging || applied)
            }
            Action::DragEnd => DispatchResult::changed(self.state.ui.drag.end()),

            Action::ContextMenuOpen { target, x, y } => self.open_context_menu(target, (x, y)),
            Action::ContextMenuMoveSelection { delta } => {
                DispatchResult::changed(self.state.ui.context_menu.move_selection(delta))
            }
            Action::ContextMenuSetSelected { index } => {
                DispatchResult::changed(self.state.ui.context_menu.set_selected(index))
            }
            Action::ContextMenuConfirm => self.confirm_context_menu(),
            Action::ContextMenuClose => DispatchResult::changed(self.state.ui.context_menu.close()),

            Action::StartRename(target) => self.start_rename(target),
            Action::CommitRename(name) => self.commit_rename(&name),
            Action::CancelRename => DispatchResult::changed(self.state.ui.rename.take().is_some()),
            Action::ConfirmDeleteFolder => self.confirm_delete_folder(),
            Action::CancelDeleteFolder => {
                DispatchResult::changed(self.state.ui.delete_folder_prompt.take().is_some())
            }

            Action::OpenFiles(paths) => DispatchResult::effects(vec![Effect::PickFiles(paths)]),
            Action::OpenDirectory(path) => {
                DispatchResult::effects(vec![Effect::PickDirectory(path)])
            }
            Action::FilesOpened(files) => {
                let opened = self.open_files(files, None);
                DispatchResult::changed(opened > 0)
            }
            Action::DirectoryOpened { name, files } => {
                let folder = self.state.workspace.create_folder_named(&name);
                let opened = self.open_files(files, Some(folder));
                tracing::info!(folder = %name, files = opened, "directory imported");
                DispatchResult::changed(true)
            }

            Action::SaveFinished { ticket, ok } => self.save_finished(ticket, ok),
            Action::FormatFinished {
                tab_id,
                request_id,
                result,
            } => self.format_finished(tab_id, request_id, result),
            Action::FileWritten { tab_id, ok } => self.file_written(tab_id, ok),
        }
    }

    fn set_active_language(&mut self, language: LanguageId) -> DispatchResult {
        let menu_was_open = std::mem::take(&mut self.state.ui.language_menu_open);
        let changed = match self.state.workspace.active_tab_id() {
            Some(id) => self.state.workspace.set_tab_language(id, language),
            None => false,
        };
        DispatchResult::changed(changed || menu_was_open)
    }

    fn drag_start(&mut self, payload: DragPayload) -> DispatchResult {
        let exists = match payload {
            DragPayload::Tab(id) => self.state.workspace.tab(id).is_some(),
            DragPayload::Folder(id) => self.state.workspace.folder(id).is_some(),
        };
        if !exists {
            return DispatchResult::changed(false);
        }
        let mut changed = self.state.ui.context_menu.close();
        changed |= self.state.ui.drag.start(payload);
        DispatchResult::changed(changed)
    }

    fn apply_drop(&mut self, intent: DropIntent) -> bool {
        let workspace = &mut self.state.workspace;
        match intent {
            DropIntent::ReorderTab { dragged, target } => workspace.reorder_tab(dragged, target),
            DropIntent::MoveTabToFolder { tab, folder } => {
                workspace.move_tab_to_folder(tab, Some(folder))
            }
            DropIntent::MoveTabToRoot { tab } => workspace.move_tab_to_folder(tab, None),
            DropIntent::ReorderFolder { dragged, target } => {
                workspace.reorder_folder(dragged, target)
            }
        }
    }

    fn export_folder(&mut self, id: FolderId) -> DispatchResult {
        match export::folder_zip(&self.state.workspace, id) {
            Some(Ok(blob)) => DispatchResult::effects(vec![Effect::Download(blob)]),
            Some(Err(e)) => {
                tracing::error!(folder_id = id.raw(), error = %e, "folder export failed");
                DispatchResult::changed(false)
            }
            None => DispatchResult::changed(false),
        }
    }

    fn open_files(&mut self, files: Vec<OpenedFile>, folder: Option<FolderId>) -> usize {
        let count = files.len();
        for file in files {
            let language = LanguageId::detect(&file.name);
            let id = self.state.workspace.open_document(
                file.name,
                file.content,
                language,
                Some(file.handle),
            );
            if folder.is_some() {
                self.state.workspace.move_tab_to_folder(id, folder);
            }
        }
        count
    }

    /// Drops UI state that points at tabs or folders that no longer exist,
    /// then pushes the autosave deadline out.
    fn after_workspace_change(&mut self) {
        let workspace = &self.state.workspace;
        let ui = &mut self.state.ui;

        ui.context_menu.retain(|target| match target {
            ContextMenuTarget::Tab(id) => workspace.tab(id).is_some(),
            ContextMenuTarget::Folder(id) => workspace.folder(id).is_some(),
        });
        if let Some(payload) = ui.drag.payload() {
            let alive = match payload {
                DragPayload::Tab(id) => workspace.tab(id).is_some(),
                DragPayload::Folder(id) => workspace.folder(id).is_some(),
            };
            if !alive {
                ui.drag.end();
            }
        }
        if let Some(rename) = &ui.rename {
            if !sidebar::rename_target_exists(workspace, rename.target) {
                ui.rename = None;
            }
        }
        if let Some(prompt) = &ui.delete_folder_prompt {
            if workspace.folder(prompt.folder).is_none() {
                ui.delete_folder_prompt = None;
            }
        }
        self.state.format.retain(|id| workspace.tab(id).is_some());

        if workspace.has_unsaved_changes() {
            self.state.autosave.timer.arm(self.clock.now());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
