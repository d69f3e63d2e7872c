use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::context_menu::ContextMenuTarget;
use crate::kernel::dnd::{DragPayload, DropTarget};
use crate::kernel::language::LanguageId;
use crate::kernel::persistence::SaveTicket;
use crate::kernel::services::ports::{FormatError, OpenedFile};
use crate::kernel::state::RenameTarget;
use crate::models::{FolderId, TabId};

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// Periodic host tick: fires the autosave debounce and expires notices.
    Tick,
    /// Writes pending changes now, e.g. before the host exits.
    Flush,

    UpdateContent(String),
    SetSelection {
        start: usize,
        end: usize,
    },
    ActivateTab(TabId),
    CloseTab(TabId),
    RenameTab {
        id: TabId,
        name: String,
    },
    ToggleLanguageMenu,
    SetLanguage(LanguageId),

    ToggleFolder(FolderId),
    RenameFolder {
        id: FolderId,
        name: String,
    },
    DeleteFolder(FolderId),
    MoveTabToFolder {
        tab: TabId,
        folder: Option<FolderId>,
    },
    ExportFolder(FolderId),

    DragStart(DragPayload),
    DragEnter(DropTarget),
    DragLeave(DropTarget),
    Drop(DropTarget),
    DragEnd,

    ContextMenuOpen {
        target: ContextMenuTarget,
        x: u16,
        y: u16,
    },
    ContextMenuMoveSelection {
        delta: isize,
    },
    ContextMenuSetSelected {
        index: usize,
    },
    ContextMenuConfirm,
    ContextMenuClose,

    StartRename(RenameTarget),
    CommitRename(String),
    CancelRename,
    ConfirmDeleteFolder,
    CancelDeleteFolder,

    OpenFiles(Vec<PathBuf>),
    OpenDirectory(PathBuf),
    FilesOpened(Vec<OpenedFile>),
    /// A picked directory, with its text files already read.
    DirectoryOpened {
        name: String,
        files: Vec<OpenedFile>,
    },

    SaveFinished {
        ticket: SaveTicket,
        ok: bool,
    },
    FormatFinished {
        tab_id: TabId,
        request_id: u64,
        result: Result<String, FormatError>,
    },
    FileWritten {
        tab_id: TabId,
        ok: bool,
    },
}
