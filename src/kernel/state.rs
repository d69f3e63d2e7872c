use crate::kernel::context_menu::ContextMenuState;
use crate::kernel::dnd::DragState;
use crate::kernel::editor::FormatState;
use crate::kernel::persistence::AutosaveState;
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::workspace::Workspace;
use crate::models::{FolderId, TabId, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameTarget {
    Tab(TabId),
    Folder(FolderId),
}

/// Inline rename in progress; `draft` starts as the current name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameState {
    pub target: RenameTarget,
    pub draft: String,
}

/// Confirmation shown before deleting a folder that still holds tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFolderPrompt {
    pub folder: FolderId,
    pub name: String,
    pub file_count: usize,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub sidebar_open: bool,
    pub theme: Theme,
    /// Char-offset selection in the active tab's text.
    pub selection: (usize, usize),
    pub drag: DragState,
    pub context_menu: ContextMenuState,
    pub language_menu_open: bool,
    pub rename: Option<RenameState>,
    pub delete_folder_prompt: Option<DeleteFolderPrompt>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            theme: Theme::default(),
            selection: (0, 0),
            drag: DragState::default(),
            context_menu: ContextMenuState::default(),
            language_menu_open: false,
            rename: None,
            delete_folder_prompt: None,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub workspace: Workspace,
    pub ui: UiState,
    pub config: EditorConfig,
    pub autosave: AutosaveState,
    pub format: FormatState,
    /// Whether opened files can be written back to where they came from.
    pub write_back: bool,
}

impl AppState {
    pub fn new(workspace: Workspace, theme: Theme, config: EditorConfig) -> Self {
        let autosave = AutosaveState::new(config.autosave_delay);
        Self {
            workspace,
            ui: UiState {
                theme,
                ..UiState::default()
            },
            config,
            autosave,
            format: FormatState::default(),
            write_back: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Workspace::with_default_tab(),
            Theme::default(),
            EditorConfig::default(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
