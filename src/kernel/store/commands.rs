use crate::core::Command;
use crate::kernel::editor::{insert_indent, toggle_line_comment, FormatNotice, FormatStart, TextEdit};
use crate::kernel::export;
use crate::kernel::state::{RenameState, RenameTarget};
use crate::kernel::Effect;

use super::DispatchResult;

impl super::Store {
    pub(super) fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        let mut state_changed = false;
        let mut effects = Vec::new();

        match command {
            Command::NewTab => {
                self.state.workspace.create_tab();
                state_changed = true;
            }
            Command::CloseTab => {
                if let Some(id) = self.state.workspace.active_tab_id() {
                    state_changed = self.state.workspace.close_tab(id);
                }
            }
            Command::NextTab => state_changed = self.state.workspace.activate_next(),
            Command::PrevTab => state_changed = self.state.workspace.activate_prev(),
            Command::NewFolder => {
                let id = self.state.workspace.create_folder();
                if let Some(folder) = self.state.workspace.folder(id) {
                    self.state.ui.rename = Some(RenameState {
                        target: RenameTarget::Folder(id),
                        draft: folder.name.clone(),
                    });
                }
                state_changed = true;
            }
            Command::Save => {
                effects = self.save_now();
                if let Some(tab) = self.state.workspace.active_tab() {
                    if let Some(handle) = &tab.origin {
                        if self.state.write_back {
                            effects.push(Effect::WriteFile {
                                tab_id: tab.id,
                                handle: handle.clone(),
                                content: tab.content.clone(),
                            });
                        } else {
                            effects.push(Effect::Download(export::tab_blob(tab)));
                        }
                    }
                }
                state_changed = !effects.is_empty();
            }
            Command::Download => {
                if let Some(tab) = self.state.workspace.active_tab() {
                    effects.push(Effect::Download(export::tab_blob(tab)));
                }
            }
            Command::Print => {
                if let Some(tab) = self.state.workspace.active_tab() {
                    effects.push(Effect::Print {
                        title: tab.name.clone(),
                        html: export::print_document(tab),
                    });
                }
            }
            Command::ToggleSidebar => {
                self.state.ui.sidebar_open = !self.state.ui.sidebar_open;
                state_changed = true;
            }
            Command::ToggleTheme => {
                let theme = self.state.ui.theme.toggled();
                self.state.ui.theme = theme;
                effects.push(Effect::ApplyTheme(theme));
                effects.push(Effect::PersistTheme(theme));
                state_changed = true;
            }
            Command::ToggleComment => state_changed = self.toggle_comment(),
            Command::InsertIndent => state_changed = self.insert_indent(),
            Command::Format => return self.start_format(),
            Command::Escape => {
                state_changed |= self.state.ui.context_menu.close();
                state_changed |= std::mem::take(&mut self.state.ui.language_menu_open);
                state_changed |= self.state.ui.rename.take().is_some();
                state_changed |= self.state.ui.delete_folder_prompt.take().is_some();
                state_changed |= self.state.ui.drag.end();
            }
        }

        DispatchResult {
            effects,
            state_changed,
        }
    }

    fn toggle_comment(&mut self) -> bool {
        let Some(tab) = self.state.workspace.active_tab() else {
            return false;
        };
        let (start, end) = self.state.ui.selection;
        match toggle_line_comment(&tab.content, start, end, tab.language) {
            Some(edit) => self.apply_text_edit(edit),
            None => false,
        }
    }

    fn insert_indent(&mut self) -> bool {
        let Some(tab) = self.state.workspace.active_tab() else {
            return false;
        };
        let (start, end) = self.state.ui.selection;
        let edit = insert_indent(&tab.content, start, end, &self.state.config.indent_unit);
        self.apply_text_edit(edit)
    }

    fn apply_text_edit(&mut self, edit: TextEdit) -> bool {
        let Some(id) = self.state.workspace.active_tab_id() else {
            return false;
        };
        let mut changed = self.state.workspace.replace_tab_content(id, edit.content);
        if self.state.ui.selection != edit.selection {
            self.state.ui.selection = edit.selection;
            changed = true;
        }
        changed
    }

    fn start_format(&mut self) -> DispatchResult {
        let Some(tab) = self.state.workspace.active_tab() else {
            return DispatchResult::changed(false);
        };
        match self.state.format.begin(tab) {
            FormatStart::Started(request) => {
                tracing::debug!(
                    tab_id = tab.id.raw(),
                    request_id = request.request_id,
                    "format requested"
                );
                let effect = Effect::FormatTab {
                    tab_id: tab.id,
                    request_id: request.request_id,
                    language: tab.language,
                    content: tab.content.clone(),
                };
                self.state.format.notice.clear();
                DispatchResult {
                    effects: vec![effect],
                    state_changed: true,
                }
            }
            FormatStart::Unsupported(language) => {
                let ttl = self.state.config.format_error_ttl;
                self.state.format.notice.show_for(
                    FormatNotice::Unsupported(language),
                    self.clock.now(),
                    ttl,
                );
                DispatchResult::changed(true)
            }
            FormatStart::Busy => {
                tracing::trace!(tab_id = tab.id.raw(), "format already in flight");
                DispatchResult::changed(false)
            }
            FormatStart::Skipped => DispatchResult::changed(false),
        }
    }
}
