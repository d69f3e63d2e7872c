//! 宿主环境：下载与打印输出写入目录，主题只记录当前值

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::Environment;
use crate::models::Theme;

pub struct DirectoryEnvironment {
    out_dir: PathBuf,
    theme: Option<Theme>,
}

impl DirectoryEnvironment {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            theme: None,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Last theme applied, if any.
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    fn write(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(sanitize_file_name(file_name));
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

impl Environment for DirectoryEnvironment {
    fn apply_theme(&mut self, theme: Theme) {
        tracing::debug!(theme = theme.as_str(), "apply theme");
        self.theme = Some(theme);
    }

    fn deliver_download(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.write(file_name, bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "download written");
        Ok(())
    }

    fn print(&mut self, title: &str, html: &str) -> io::Result<()> {
        let path = self.write(&format!("{title}.print.html"), html.as_bytes())?;
        tracing::info!(path = %path.display(), "print document written");
        Ok(())
    }
}

/// Strips path separators and control characters so names stay inside the
/// output directory.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/environment.rs"]
mod tests;
