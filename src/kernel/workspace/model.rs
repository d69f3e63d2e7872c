use serde::{Deserialize, Serialize};

use crate::kernel::language::LanguageId;
use crate::models::{DocumentStats, FileHandle, FolderId, TabId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing)]
    pub is_modified: bool,
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    #[serde(default)]
    pub language: LanguageId,
    #[serde(skip)]
    pub origin: Option<FileHandle>,
    /// Bumped on every content or name change; lets async results detect staleness.
    #[serde(skip)]
    pub edit_version: u64,
}

impl Tab {
    pub fn new(id: TabId, name: String) -> Self {
        Self {
            id,
            name,
            content: String::new(),
            is_modified: false,
            folder_id: None,
            language: LanguageId::PlainText,
            origin: None,
            edit_version: 0,
        }
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::of(&self.content)
    }

    /// Name used for downloads: the tab name, plus the language extension if it has none.
    pub fn file_name(&self) -> String {
        if self.name.contains('.') {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.language.default_extension())
        }
    }

    pub(crate) fn touch(&mut self) {
        self.is_modified = true;
        self.edit_version = self.edit_version.wrapping_add(1);
    }
}

fn expanded() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    #[serde(default = "expanded")]
    pub is_expanded: bool,
}

impl Folder {
    pub fn new(id: FolderId, name: String) -> Self {
        Self {
            id,
            name,
            is_expanded: true,
        }
    }
}
