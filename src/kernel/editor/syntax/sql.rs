use super::{HighlightKind, HighlightSpan};

/// Comments, quoted strings, numbers and reserved words in the stretches
/// of `text` that no span in `existing` covers. `existing` must be sorted
/// and disjoint.
pub(super) fn fallback_spans(text: &str, existing: &[HighlightSpan]) -> Vec<HighlightSpan> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut covered = existing.iter().peekable();
    let mut i = 0usize;

    while i < bytes.len() {
        while covered.peek().is_some_and(|span| span.end <= i) {
            covered.next();
        }
        if let Some(span) = covered.peek().filter(|span| span.start <= i) {
            i = span.end;
            continue;
        }
        let limit = covered.peek().map_or(bytes.len(), |span| span.start);

        let start = i;
        let b = bytes[i];
        let kind = if bytes[i..limit].starts_with(b"--") {
            i = find_byte(bytes, i, limit, b'\n');
            Some(HighlightKind::Comment)
        } else if bytes[i..limit].starts_with(b"/*") {
            i = find_block_end(bytes, i + 2, limit);
            Some(HighlightKind::Comment)
        } else if b == b'\'' {
            i = find_quote_end(bytes, i + 1, limit);
            Some(HighlightKind::String)
        } else if b.is_ascii_digit() {
            i = scan_number(bytes, i, limit);
            Some(HighlightKind::Number)
        } else if is_word_start(b) {
            while i < limit && is_word_continue(bytes[i]) {
                i += 1;
            }
            classify_word(&text[start..i])
        } else {
            i += 1;
            None
        };

        if let Some(kind) = kind {
            out.push(HighlightSpan {
                start,
                end: i,
                kind,
            });
        }
    }

    out
}

fn find_byte(bytes: &[u8], from: usize, limit: usize, needle: u8) -> usize {
    memchr::memchr(needle, &bytes[from..limit]).map_or(limit, |at| from + at)
}

fn find_block_end(bytes: &[u8], mut i: usize, limit: usize) -> usize {
    while i + 1 < limit {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    limit
}

/// `''` inside a literal is an escaped quote.
fn find_quote_end(bytes: &[u8], mut i: usize, limit: usize) -> usize {
    while i < limit {
        if bytes[i] == b'\'' {
            if i + 1 < limit && bytes[i + 1] == b'\'' {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    limit
}

fn scan_number(bytes: &[u8], mut i: usize, limit: usize) -> usize {
    while i < limit && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i + 1 < limit && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
        i += 1;
        while i < limit && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i
}

fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn classify_word(word: &str) -> Option<HighlightKind> {
    let upper = word.to_ascii_uppercase();
    if TYPE_NAMES.contains(&upper.as_str()) {
        Some(HighlightKind::Type)
    } else if matches!(upper.as_str(), "TRUE" | "FALSE" | "NULL") {
        Some(HighlightKind::Constant)
    } else if RESERVED_WORDS.contains(&upper.as_str()) {
        Some(HighlightKind::Keyword)
    } else {
        None
    }
}

/// Node kinds the grammar emits for keywords: `keyword_*` names and bare
/// upper-case tokens such as `SELECT` or `GROUP_BY`.
pub(super) fn is_keyword_kind(kind: &str) -> bool {
    if kind.starts_with("keyword_") {
        return true;
    }
    if matches!(kind, "ERROR" | "MISSING") {
        return false;
    }
    let mut has_alpha = false;
    for b in kind.bytes() {
        if b.is_ascii_uppercase() {
            has_alpha = true;
        } else if b != b'_' {
            return false;
        }
    }
    has_alpha
}

const RESERVED_WORDS: &[&str] = &[
    "ALL", "ALTER", "AND", "AS", "ASC", "BEGIN", "BETWEEN", "BY", "CASE", "CASCADE", "CHECK",
    "COMMIT", "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP",
    "ELSE", "END", "EXISTS", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IF", "IN", "INDEX",
    "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "OFFSET",
    "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "REPLACE", "RETURNING", "RIGHT",
    "ROLLBACK", "SELECT", "SET", "TABLE", "THEN", "UNION", "UNIQUE", "UPDATE", "USING", "VALUES",
    "VIEW", "WHEN", "WHERE", "WITH",
];

const TYPE_NAMES: &[&str] = &[
    "BIGINT", "BLOB", "BOOLEAN", "CHAR", "DATE", "DECIMAL", "DOUBLE", "FLOAT", "INT", "INTEGER",
    "NUMERIC", "REAL", "SMALLINT", "TEXT", "TIME", "TIMESTAMP", "VARCHAR",
];
