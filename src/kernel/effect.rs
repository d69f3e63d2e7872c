use std::path::PathBuf;

use crate::kernel::export::ExportBlob;
use crate::kernel::language::LanguageId;
use crate::kernel::persistence::WorkspaceSnapshot;
use crate::models::{FileHandle, TabId, Theme};

#[derive(Debug, Clone)]
pub enum Effect {
    PersistWorkspace(WorkspaceSnapshot),
    PersistTheme(Theme),
    ApplyTheme(Theme),
    FormatTab {
        tab_id: TabId,
        request_id: u64,
        language: LanguageId,
        content: String,
    },
    PickFiles(Vec<PathBuf>),
    PickDirectory(PathBuf),
    WriteFile {
        tab_id: TabId,
        handle: FileHandle,
        content: String,
    },
    Download(ExportBlob),
    Print {
        title: String,
        html: String,
    },
}
