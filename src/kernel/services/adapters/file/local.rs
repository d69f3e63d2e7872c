//! 本地文件系统桥接
//!
//! 目录导入跳过隐藏项、`node_modules` 与 `__pycache__`，只保留文本文件。

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::kernel::language::is_text_file;
use crate::kernel::services::ports::file::{
    BridgeError, DirectoryEntry, EntryKind, FileBridge, OpenedDirectory, OpenedFile,
};
use crate::models::FileHandle;

const SKIPPED_DIRS: &[&str] = &["node_modules", "__pycache__"];

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileBridge;

impl LocalFileBridge {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, path: &Path) -> Result<OpenedFile, BridgeError> {
        let handle = FileHandle::new(path);
        let content = self.read_file(&handle)?;
        Ok(OpenedFile {
            name: handle.file_name(),
            content,
            handle,
        })
    }
}

impl FileBridge for LocalFileBridge {
    fn supports_write_back(&self) -> bool {
        true
    }

    fn pick_files(&self, paths: &[PathBuf]) -> Result<Vec<OpenedFile>, BridgeError> {
        paths.iter().map(|path| self.open(path)).collect()
    }

    fn pick_directory(&self, path: &Path) -> Result<OpenedDirectory, BridgeError> {
        if !path.is_dir() {
            return Err(BridgeError::WrongKind {
                expected: "directory",
                path: path.to_path_buf(),
            });
        }

        let walker = WalkBuilder::new(path)
            .hidden(true)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                !SKIPPED_DIRS.contains(&name.as_ref())
            })
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().to_string();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() && is_text_file(&name) {
                EntryKind::File
            } else {
                continue;
            };
            let relative_path = entry
                .path()
                .strip_prefix(path)
                .unwrap_or(entry.path())
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            entries.push(DirectoryEntry {
                name,
                relative_path,
                kind,
                handle: FileHandle::new(entry.path()),
            });
        }

        entries.sort_by(|a, b| match (a.kind, b.kind) {
            (EntryKind::Directory, EntryKind::File) => std::cmp::Ordering::Less,
            (EntryKind::File, EntryKind::Directory) => std::cmp::Ordering::Greater,
            _ => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.relative_path.cmp(&b.relative_path)),
        });

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(OpenedDirectory { name, entries })
    }

    fn read_file(&self, handle: &FileHandle) -> Result<String, BridgeError> {
        let path = handle.path();
        if !path.is_file() {
            return Err(BridgeError::WrongKind {
                expected: "file",
                path: path.to_path_buf(),
            });
        }
        fs::read_to_string(path).map_err(|e| BridgeError::io("read", path, e))
    }

    /// Writes through a uniquely named temp file in the target's directory,
    /// then renames it over the target. Concurrent writes of one handle each
    /// land whole; the last rename wins.
    fn write_file(&self, handle: &FileHandle, text: &str) -> Result<(), BridgeError> {
        let path = handle.path();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = tempfile::Builder::new()
            .prefix(".notepad-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| BridgeError::io("create", dir, e))?;
        temp.write_all(text.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| BridgeError::io("write", temp.path(), e))?;
        temp.persist(path)
            .map_err(|e| BridgeError::io("rename", path, e.error))?;
        Ok(())
    }
}
