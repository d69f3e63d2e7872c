use std::sync::OnceLock;

use regex::Regex;

const PLACEHOLDER_PREFIX: &str = "Untitled-";
const FOLDER_PREFIX: &str = "New Folder";

pub fn placeholder_tab_name(n: u64) -> String {
    format!("{PLACEHOLDER_PREFIX}{n}")
}

pub fn default_folder_name(n: u64) -> String {
    format!("{FOLDER_PREFIX} {n}")
}

/// Tabs keep deriving their name from content while this holds.
pub fn is_placeholder(name: &str) -> bool {
    name.starts_with(PLACEHOLDER_PREFIX)
}

fn unsafe_chars() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_\-.]").ok())
        .as_ref()
}

/// First whitespace-delimited word of `content`, stripped to file-name-safe
/// characters. Only yields once the word is complete (a whitespace exists),
/// and skips words longer than `max_len` characters.
pub fn derive_name(content: &str, max_len: usize) -> Option<String> {
    if !content.chars().any(char::is_whitespace) {
        return None;
    }
    let first = content.split_whitespace().next()?;
    if first.chars().count() > max_len {
        return None;
    }
    let clean = unsafe_chars()?.replace_all(first, "");
    if clean.is_empty() {
        return None;
    }
    Some(clean.into_owned())
}
