use unicode_segmentation::UnicodeSegmentation;

/// Counters shown in the status bar for the active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub lines: usize,
    pub words: usize,
    /// Length in UTF-16 code units, which is what the editor surface reports.
    pub len_utf16: usize,
}

impl DocumentStats {
    pub fn of(text: &str) -> Self {
        Self {
            lines: memchr::memchr_iter(b'\n', text.as_bytes()).count() + 1,
            words: text.unicode_words().count(),
            len_utf16: text.encode_utf16().count(),
        }
    }
}
