//! Export surfaces: a tab as a file blob, a folder as a zip, a tab as a print page.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::kernel::editor::syntax::push_escaped;
use crate::kernel::workspace::{Tab, Workspace};
use crate::models::FolderId;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn tab_blob(tab: &Tab) -> ExportBlob {
    ExportBlob {
        file_name: tab.file_name(),
        bytes: tab.content.as_bytes().to_vec(),
    }
}

/// Returns `name`, or `stem (n).ext` for the n-th repeat within one archive.
fn unique_entry_name(name: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.to_string()) {
        return name.to_string();
    }
    let (stem, ext) = match name.rfind('.') {
        Some(dot) if dot > 0 => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    };
    let mut n = 2usize;
    loop {
        let candidate = format!("{stem} ({n}){ext}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Zips every tab in `folder`, one entry per tab. `None` for an unknown folder.
pub fn folder_zip(
    workspace: &Workspace,
    folder: FolderId,
) -> Option<Result<ExportBlob, ExportError>> {
    let folder = workspace.folder(folder)?;
    let tabs: Vec<&Tab> = workspace.tabs_in(Some(folder.id)).collect();
    Some(zip_tabs(&tabs).map(|bytes| ExportBlob {
        file_name: format!("{}.zip", folder.name),
        bytes,
    }))
}

fn zip_tabs(tabs: &[&Tab]) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut taken = HashSet::new();
    for tab in tabs {
        let name = unique_entry_name(&tab.file_name(), &mut taken);
        zip.start_file(name, options)?;
        zip.write_all(tab.content.as_bytes())?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Standalone HTML page showing the tab's raw content as preformatted text.
pub fn print_document(tab: &Tab) -> String {
    let mut html = String::with_capacity(tab.content.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    push_escaped(&mut html, &tab.name);
    html.push_str("</title>\n<style>body{font-family:monospace;white-space:pre-wrap;}</style>\n");
    html.push_str("</head>\n<body>\n<pre>");
    push_escaped(&mut html, &tab.content);
    html.push_str("</pre>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/export.rs"]
mod tests;
