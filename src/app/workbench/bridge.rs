use super::Workbench;
use crate::kernel::persistence;
use crate::kernel::services::ports::OpenedFile;
use crate::kernel::{Action, Effect};
use std::path::{Path, PathBuf};

impl Workbench {
    pub(super) fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::PersistWorkspace(snapshot) => {
                let ok = match persistence::write_snapshot(self.kv.as_mut(), &snapshot) {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to persist workspace");
                        false
                    }
                };
                self.dispatch(Action::SaveFinished {
                    ticket: snapshot.ticket,
                    ok,
                })
            }
            Effect::PersistTheme(theme) => {
                if let Err(e) = persistence::save_theme(self.kv.as_mut(), theme) {
                    tracing::warn!(error = %e, "failed to persist theme");
                }
                false
            }
            Effect::ApplyTheme(theme) => {
                self.environment.apply_theme(theme);
                false
            }
            Effect::FormatTab {
                tab_id,
                request_id,
                language,
                content,
            } => {
                self.runtime.format(
                    self.formatter.clone(),
                    tab_id,
                    request_id,
                    language,
                    content,
                );
                false
            }
            Effect::PickFiles(paths) => self.open_files(&paths),
            Effect::PickDirectory(path) => self.open_directory(&path),
            Effect::WriteFile {
                tab_id,
                handle,
                content,
            } => {
                self.runtime
                    .write_file(self.files.clone(), tab_id, handle, content);
                false
            }
            Effect::Download(blob) => {
                if let Err(e) = self
                    .environment
                    .deliver_download(&blob.file_name, &blob.bytes)
                {
                    tracing::error!(file = %blob.file_name, error = %e, "download failed");
                }
                false
            }
            Effect::Print { title, html } => {
                if let Err(e) = self.environment.print(&title, &html) {
                    tracing::error!(title = %title, error = %e, "print failed");
                }
                false
            }
        }
    }

    fn open_files(&mut self, paths: &[PathBuf]) -> bool {
        match self.files.pick_files(paths) {
            Ok(files) if files.is_empty() => false,
            Ok(files) => self.dispatch(Action::FilesOpened(files)),
            Err(e) => {
                tracing::error!(error = %e, "failed to open files");
                false
            }
        }
    }

    fn open_directory(&mut self, path: &Path) -> bool {
        let directory = match self.files.pick_directory(path) {
            Ok(directory) => directory,
            Err(e) => {
                tracing::error!(error = %e, "failed to open directory");
                return false;
            }
        };

        let mut files = Vec::new();
        for entry in directory.files() {
            match self.files.read_file(&entry.handle) {
                Ok(content) => files.push(OpenedFile {
                    name: entry.name.clone(),
                    content,
                    handle: entry.handle.clone(),
                }),
                Err(e) => {
                    tracing::warn!(path = %entry.relative_path, error = %e, "skipping unreadable file");
                }
            }
        }

        self.dispatch(Action::DirectoryOpened {
            name: directory.name,
            files,
        })
    }
}
