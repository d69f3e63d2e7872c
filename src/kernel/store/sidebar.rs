use crate::kernel::context_menu::{ContextMenuItem, ContextMenuTarget};
use crate::kernel::export;
use crate::kernel::state::{DeleteFolderPrompt, RenameState, RenameTarget};
use crate::kernel::workspace::Workspace;
use crate::kernel::Effect;
use crate::models::FolderId;

use super::DispatchResult;

pub(super) fn rename_target_exists(workspace: &Workspace, target: RenameTarget) -> bool {
    match target {
        RenameTarget::Tab(id) => workspace.tab(id).is_some(),
        RenameTarget::Folder(id) => workspace.folder(id).is_some(),
    }
}

impl super::Store {
    pub(super) fn open_context_menu(
        &mut self,
        target: ContextMenuTarget,
        anchor: (u16, u16),
    ) -> DispatchResult {
        let exists = match target {
            ContextMenuTarget::Tab(id) => self.state.workspace.tab(id).is_some(),
            ContextMenuTarget::Folder(id) => self.state.workspace.folder(id).is_some(),
        };
        if !exists {
            return DispatchResult::changed(self.state.ui.context_menu.close());
        }
        DispatchResult::changed(self.state.ui.context_menu.open(target, anchor))
    }

    pub(super) fn confirm_context_menu(&mut self) -> DispatchResult {
        let Some((item, target)) = self.state.ui.context_menu.confirm() else {
            return DispatchResult::changed(false);
        };

        let mut result = match (item, target) {
            (ContextMenuItem::RenameTab, ContextMenuTarget::Tab(id)) => {
                self.start_rename(RenameTarget::Tab(id))
            }
            (ContextMenuItem::DownloadTab, ContextMenuTarget::Tab(id)) => {
                match self.state.workspace.tab(id) {
                    Some(tab) => DispatchResult::effects(vec![Effect::Download(export::tab_blob(tab))]),
                    None => DispatchResult::changed(false),
                }
            }
            (ContextMenuItem::DeleteTab, ContextMenuTarget::Tab(id)) => {
                DispatchResult::changed(self.state.workspace.delete_tab(id))
            }
            (ContextMenuItem::RenameFolder, ContextMenuTarget::Folder(id)) => {
                self.start_rename(RenameTarget::Folder(id))
            }
            (ContextMenuItem::DownloadFolder, ContextMenuTarget::Folder(id)) => {
                self.export_folder(id)
            }
            (ContextMenuItem::DeleteFolder, ContextMenuTarget::Folder(id)) => {
                self.request_delete_folder(id)
            }
            _ => DispatchResult::changed(false),
        };
        // The menu itself closed.
        result.state_changed = true;
        result
    }

    fn request_delete_folder(&mut self, id: FolderId) -> DispatchResult {
        let Some(folder) = self.state.workspace.folder(id) else {
            return DispatchResult::changed(false);
        };
        let file_count = self.state.workspace.folder_tab_count(id);
        if file_count == 0 {
            return DispatchResult::changed(self.state.workspace.delete_folder(id));
        }
        self.state.ui.delete_folder_prompt = Some(DeleteFolderPrompt {
            folder: id,
            name: folder.name.clone(),
            file_count,
        });
        DispatchResult::changed(true)
    }

    pub(super) fn confirm_delete_folder(&mut self) -> DispatchResult {
        let Some(prompt) = self.state.ui.delete_folder_prompt.take() else {
            return DispatchResult::changed(false);
        };
        self.state.workspace.delete_folder(prompt.folder);
        DispatchResult::changed(true)
    }

    pub(super) fn start_rename(&mut self, target: RenameTarget) -> DispatchResult {
        let name = match target {
            RenameTarget::Tab(id) => self.state.workspace.tab(id).map(|t| t.name.clone()),
            RenameTarget::Folder(id) => self.state.workspace.folder(id).map(|f| f.name.clone()),
        };
        let Some(draft) = name else {
            return DispatchResult::changed(false);
        };
        let next = RenameState { target, draft };
        if self.state.ui.rename.as_ref() == Some(&next) {
            return DispatchResult::changed(false);
        }
        self.state.ui.rename = Some(next);
        DispatchResult::changed(true)
    }

    /// Leaves rename mode; a blank name keeps the old one.
    pub(super) fn commit_rename(&mut self, name: &str) -> DispatchResult {
        let Some(rename) = self.state.ui.rename.take() else {
            return DispatchResult::changed(false);
        };
        match rename.target {
            RenameTarget::Tab(id) => self.state.workspace.rename_tab(id, name),
            RenameTarget::Folder(id) => self.state.workspace.rename_folder(id, name),
        };
        DispatchResult::changed(true)
    }
}
