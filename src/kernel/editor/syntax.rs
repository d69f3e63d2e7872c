//! Highlight projection: display-only markup derived from a tab's content.
//!
//! Parsing happens per call on the whole text. A language without a grammar,
//! an empty text, or a parser that gives up all yield the unmarked projection.
//! SQL also gets a word scan over the text the grammar left unmarked.

mod classify;
mod sql;

use tree_sitter::{Language, Parser, Tree};

use self::classify::classify_node;
use crate::kernel::language::{Grammar, LanguageId};
use crate::models::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment,
    String,
    Keyword,
    Type,
    Number,
    Constant,
    Function,
    Attribute,
    Tag,
    Property,
}

impl HighlightKind {
    /// Tree traversal skips the children of leaf kinds.
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Comment | Self::String | Self::Attribute | Self::Tag | Self::Property
        )
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Comment => "hl-comment",
            Self::String => "hl-string",
            Self::Keyword => "hl-keyword",
            Self::Type => "hl-type",
            Self::Number => "hl-number",
            Self::Constant => "hl-constant",
            Self::Function => "hl-function",
            Self::Attribute => "hl-attribute",
            Self::Tag => "hl-tag",
            Self::Property => "hl-property",
        }
    }
}

/// Byte range into the projected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub text: String,
    pub spans: Vec<HighlightSpan>,
}

impl Projection {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            spans: Vec::new(),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// HTML-escaped text with each span wrapped in `<span class="hl-…">`.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + self.spans.len() * 32);
        let mut pos = 0;
        for span in &self.spans {
            push_escaped(&mut out, &self.text[pos..span.start]);
            out.push_str("<span class=\"");
            out.push_str(span.kind.css_class());
            out.push_str("\">");
            push_escaped(&mut out, &self.text[span.start..span.end]);
            out.push_str("</span>");
            pos = span.end;
        }
        push_escaped(&mut out, &self.text[pos..]);
        out
    }
}

pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

pub fn project(content: &str, language: LanguageId) -> Projection {
    let Some(grammar) = language.grammar() else {
        return Projection::plain(content);
    };
    if content.is_empty() {
        return Projection::plain(content);
    }

    let mut parser = Parser::new();
    if parser.set_language(tree_sitter_language(grammar)).is_err() {
        tracing::warn!(language = language.id(), "grammar rejected by parser");
        return Projection::plain(content);
    }
    let Some(tree) = parser.parse(content, None) else {
        tracing::debug!(language = language.id(), "parse gave up");
        return Projection::plain(content);
    };

    Projection {
        text: content.to_string(),
        spans: collect_highlights(grammar, &tree, content),
    }
}

/// Markup form of [`project`].
pub fn highlight(content: &str, language: LanguageId) -> String {
    project(content, language).to_markup()
}

fn tree_sitter_language(grammar: Grammar) -> Language {
    match grammar {
        Grammar::Rust => tree_sitter_rust::language(),
        Grammar::Go => tree_sitter_go::language(),
        Grammar::Python => tree_sitter_python::language(),
        Grammar::C => tree_sitter_c::language(),
        Grammar::Cpp => tree_sitter_cpp::language(),
        Grammar::Java => tree_sitter_java::language(),
        Grammar::JavaScript => tree_sitter_javascript::language(),
        Grammar::TypeScript => tree_sitter_typescript::language_typescript(),
        Grammar::Tsx => tree_sitter_typescript::language_tsx(),
        Grammar::Json => tree_sitter_json::language(),
        Grammar::Yaml => tree_sitter_yaml::language(),
        Grammar::Html => tree_sitter_html::language(),
        Grammar::Xml => tree_sitter_xml::language_xml(),
        Grammar::Css => tree_sitter_css::language(),
        Grammar::Bash => tree_sitter_bash::language(),
        Grammar::Markdown => tree_sitter_md::language(),
        Grammar::Sql => db3_sqlparser::language(),
        Grammar::CSharp => tree_sitter_c_sharp::language(),
        Grammar::Php => tree_sitter_php::language(),
        Grammar::Ruby => tree_sitter_ruby::language(),
        Grammar::Swift => tree_sitter_swift::language(),
        Grammar::Kotlin => tree_sitter_kotlin::language(),
    }
}

fn collect_highlights(grammar: Grammar, tree: &Tree, content: &str) -> Vec<HighlightSpan> {
    let text_len = content.len();
    let mut stack = vec![tree.root_node()];
    let mut spans = Vec::new();

    while let Some(node) = stack.pop() {
        if let Some(kind) = classify_node(grammar, node) {
            let start = node.start_byte().min(text_len);
            let end = node.end_byte().min(text_len);
            if start < end {
                spans.push(HighlightSpan { start, end, kind });
            }
            if kind.is_leaf() {
                continue;
            }
        }

        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }

    normalize_spans(&mut spans);
    if grammar == Grammar::Sql {
        let gaps = sql::fallback_spans(content, &spans);
        if !gaps.is_empty() {
            spans.extend(gaps);
            normalize_spans(&mut spans);
        }
    }
    spans
}

/// Sorts spans, keeps the outermost of any overlapping pair and merges
/// touching spans of the same kind.
fn normalize_spans(spans: &mut Vec<HighlightSpan>) {
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut out: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        if let Some(prev) = out.last_mut() {
            if span.start < prev.end {
                continue;
            }
            if prev.kind == span.kind && span.start == prev.end {
                prev.end = span.end;
                continue;
            }
        }
        out.push(span);
    }
    *spans = out;
}

/// Single-slot memo for the active tab's projection.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    key: Option<(TabId, u64, LanguageId)>,
    projection: Option<Projection>,
}

impl ProjectionCache {
    pub fn get_or_project(
        &mut self,
        tab_id: TabId,
        edit_version: u64,
        language: LanguageId,
        content: &str,
    ) -> &Projection {
        let key = (tab_id, edit_version, language);
        if self.key != Some(key) || self.projection.is_none() {
            self.key = Some(key);
            self.projection = Some(project(content, language));
        }
        self.projection.get_or_insert_with(|| Projection::plain(content))
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.projection = None;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/syntax.rs"]
mod tests;
