//! Content-level edits on a tab's text.
//!
//! Offsets are char indices into the content. Out-of-range offsets are
//! clamped to the end of the text and reversed selections are normalized.

use crate::kernel::language::{CommentSyntax, LanguageId};
use crate::kernel::workspace::{naming, Workspace};
use crate::models::TabId;

/// Rewritten content plus the selection the caller should restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub content: String,
    pub selection: (usize, usize),
}

impl Workspace {
    /// Replaces the active tab's content, then lets a placeholder-named tab
    /// pick up its name from the first complete word.
    pub fn update_content(&mut self, text: &str, auto_name_max_len: usize) -> bool {
        let Some(id) = self.active_tab_id() else {
            return false;
        };
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if tab.content == text {
            return false;
        }
        tab.content = text.to_string();
        if naming::is_placeholder(&tab.name) {
            if let Some(name) = naming::derive_name(text, auto_name_max_len) {
                tracing::debug!(tab_id = id.raw(), %name, "tab auto-named");
                tab.name = name;
            }
        }
        tab.touch();
        self.note_edit();
        true
    }

    /// Content replacement for a specific tab, without auto-naming.
    pub fn replace_tab_content(&mut self, id: TabId, text: String) -> bool {
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if tab.content == text {
            return false;
        }
        tab.content = text;
        tab.touch();
        self.note_edit();
        true
    }
}

fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}

fn ordered(text: &str, start: usize, end: usize) -> (usize, usize) {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    (byte_offset(text, start), byte_offset(text, end))
}

/// Replaces the selection with one indentation unit and puts the cursor after it.
pub fn insert_indent(content: &str, start: usize, end: usize, unit: &str) -> TextEdit {
    let (start_byte, end_byte) = ordered(content, start, end);
    let mut out = String::with_capacity(content.len() + unit.len());
    out.push_str(&content[..start_byte]);
    out.push_str(unit);
    out.push_str(&content[end_byte..]);

    let cursor = content[..start_byte].chars().count() + unit.chars().count();
    TextEdit {
        content: out,
        selection: (cursor, cursor),
    }
}

/// Comments or uncomments every line touched by the selection.
///
/// Returns `None` for languages without comment syntax (plain text).
pub fn toggle_line_comment(
    content: &str,
    start: usize,
    end: usize,
    language: LanguageId,
) -> Option<TextEdit> {
    let syntax = language.comment_syntax()?;
    let (start_byte, end_byte) = ordered(content, start, end);

    let span_start = content[..start_byte].rfind('\n').map_or(0, |i| i + 1);
    let span_end = content[end_byte..]
        .find('\n')
        .map_or(content.len(), |i| end_byte + i);

    let lines: Vec<&str> = content[span_start..span_end].split('\n').collect();
    let uncomment = all_commented(&lines, syntax);
    let rewritten = lines
        .iter()
        .map(|line| {
            if uncomment {
                strip_comment(line, syntax)
            } else {
                add_comment(line, syntax)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::with_capacity(content.len() + rewritten.len());
    out.push_str(&content[..span_start]);
    out.push_str(&rewritten);
    out.push_str(&content[span_end..]);

    let sel_start = content[..span_start].chars().count();
    let sel_end = sel_start + rewritten.chars().count();
    Some(TextEdit {
        content: out,
        selection: (sel_start, sel_end),
    })
}

fn all_commented(lines: &[&str], syntax: CommentSyntax) -> bool {
    let start = syntax.start.trim();
    let mut saw_code = false;
    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        saw_code = true;
        if !line.trim_start().starts_with(start) {
            return false;
        }
        if let Some(end) = syntax.end {
            if !line.trim_end().ends_with(end.trim()) {
                return false;
            }
        }
    }
    saw_code
}

fn split_indent(line: &str) -> (&str, &str) {
    let body = line.trim_start();
    (&line[..line.len() - body.len()], body)
}

fn add_comment(line: &str, syntax: CommentSyntax) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }
    let (indent, body) = split_indent(line);
    let mut out = format!("{indent}{}{body}", syntax.start);
    if let Some(end) = syntax.end {
        out.push_str(end);
    }
    out
}

fn strip_comment(line: &str, syntax: CommentSyntax) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }
    let (indent, body) = split_indent(line);
    let body = body
        .strip_prefix(syntax.start)
        .or_else(|| body.strip_prefix(syntax.start.trim()))
        .unwrap_or(body);

    let body = match syntax.end {
        Some(end) => body
            .strip_suffix(end)
            .or_else(|| {
                let trimmed = body.trim_end();
                trimmed.strip_suffix(end.trim())
            })
            .unwrap_or(body),
        None => body,
    };
    format!("{indent}{body}")
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/edit.rs"]
mod tests;
