use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::FileHandle;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{op} failed for {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a {expected}: {path}")]
    WrongKind {
        expected: &'static str,
        path: PathBuf,
    },
    #[error("writing back to the original file is not supported")]
    WriteUnsupported,
}

impl BridgeError {
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub name: String,
    pub content: String,
    pub handle: FileHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    /// `/`-separated path below the picked directory.
    pub relative_path: String,
    pub kind: EntryKind,
    pub handle: FileHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedDirectory {
    pub name: String,
    pub entries: Vec<DirectoryEntry>,
}

impl OpenedDirectory {
    pub fn files(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }
}

/// Access to documents that live outside the workspace store.
///
/// Implementations that cannot write back report it through
/// [`FileBridge::supports_write_back`]; callers fall back to a download.
pub trait FileBridge: Send + Sync {
    fn supports_write_back(&self) -> bool;
    fn pick_files(&self, paths: &[PathBuf]) -> Result<Vec<OpenedFile>, BridgeError>;
    fn pick_directory(&self, path: &Path) -> Result<OpenedDirectory, BridgeError>;
    fn read_file(&self, handle: &FileHandle) -> Result<String, BridgeError>;
    fn write_file(&self, handle: &FileHandle, text: &str) -> Result<(), BridgeError>;
}
