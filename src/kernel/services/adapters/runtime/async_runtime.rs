use super::message::AppMessage;
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::{CodeFormatter, FileBridge, FormatError};
use crate::models::{FileHandle, TabId};
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    pub fn format(
        &self,
        formatter: Arc<dyn CodeFormatter>,
        tab_id: TabId,
        request_id: u64,
        language: LanguageId,
        content: String,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result =
                tokio::task::spawn_blocking(move || formatter.format(&content, language)).await;
            let result = match result {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(tab = tab_id.raw(), error = %e, "format task failed");
                    Err(FormatError::Syntax("Failed to format code".to_string()))
                }
            };
            let _ = tx.send(AppMessage::FormatFinished {
                tab_id,
                request_id,
                result,
            });
        });
    }

    pub fn write_file(
        &self,
        bridge: Arc<dyn FileBridge>,
        tab_id: TabId,
        handle: FileHandle,
        content: String,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let path = handle.path().to_path_buf();
            let result =
                tokio::task::spawn_blocking(move || bridge.write_file(&handle, &content)).await;

            let ok = match result {
                Ok(Ok(())) => true,
                Ok(Err(e)) => {
                    tracing::warn!(path = %path.display(), error = %e, "write back failed");
                    false
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "write task failed");
                    false
                }
            };

            let _ = tx.send(AppMessage::FileWritten { tab_id, ok });
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
