//! 文件桥接
//!
//! 打开本地文件/目录，并在支持时把标签页内容写回原文件。

pub mod local;

pub use local::LocalFileBridge;

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::file::{
    BridgeError, FileBridge, OpenedDirectory, OpenedFile,
};
use crate::models::FileHandle;

/// Opens files like [`LocalFileBridge`] but never writes back; saving falls
/// back to a download.
#[derive(Debug, Default)]
pub struct ReadOnlyFileBridge {
    inner: LocalFileBridge,
}

impl ReadOnlyFileBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileBridge for ReadOnlyFileBridge {
    fn supports_write_back(&self) -> bool {
        false
    }

    fn pick_files(&self, paths: &[PathBuf]) -> Result<Vec<OpenedFile>, BridgeError> {
        self.inner.pick_files(paths)
    }

    fn pick_directory(&self, path: &Path) -> Result<OpenedDirectory, BridgeError> {
        self.inner.pick_directory(path)
    }

    fn read_file(&self, handle: &FileHandle) -> Result<String, BridgeError> {
        self.inner.read_file(handle)
    }

    fn write_file(&self, _handle: &FileHandle, _text: &str) -> Result<(), BridgeError> {
        Err(BridgeError::WriteUnsupported)
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file.rs"]
mod tests;
