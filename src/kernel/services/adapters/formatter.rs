//! 内置格式化器
//!
//! JSON 只重排空白（字面量原样保留），CSS 走 malva，HTML/XML 走 markup_fmt，
//! YAML 走 pretty_yaml，Markdown 与 JS/TS 走 dprint 插件。

use std::borrow::Cow;
use std::path::Path;

use crate::kernel::language::{FormatterKind, LanguageId};
use crate::kernel::services::ports::formatter::{CodeFormatter, FormatError};

const PRINT_WIDTH: u32 = 80;
const INDENT_WIDTH: u8 = 2;

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFormatter;

impl BuiltinFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl CodeFormatter for BuiltinFormatter {
    fn supports(&self, language: LanguageId) -> bool {
        language.formatter().is_some()
    }

    fn format(&self, text: &str, language: LanguageId) -> Result<String, FormatError> {
        match language.formatter() {
            Some(FormatterKind::Json) => format_json(text),
            Some(FormatterKind::Css) => format_css(text),
            Some(FormatterKind::Html) => format_markup(text, markup_fmt::Language::Html),
            Some(FormatterKind::Xml) => format_markup(text, markup_fmt::Language::Xml),
            Some(FormatterKind::Yaml) => format_yaml(text),
            Some(FormatterKind::Markdown) => format_markdown(text),
            Some(FormatterKind::Script) => format_script(text, language.default_extension()),
            None => Err(FormatError::Unsupported(language)),
        }
    }
}

fn syntax_error(e: impl std::fmt::Display) -> FormatError {
    FormatError::Syntax(e.to_string())
}

/// Validates with serde_json, then re-lays the tokens out with two-space
/// indentation. Scalars are copied verbatim so number literals keep their
/// exact spelling.
fn format_json(text: &str) -> Result<String, FormatError> {
    serde_json::from_str::<serde::de::IgnoredAny>(text).map_err(syntax_error)?;
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    reindent_json(text, &mut out);
    out.push('\n');
    Ok(out)
}

fn reindent_json(text: &str, out: &mut String) {
    let mut depth = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                while let Some(c) = chars.next() {
                    out.push(c);
                    match c {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                out.push(escaped);
                            }
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '{' | '[' => {
                let close = if ch == '{' { '}' } else { ']' };
                while chars.peek().is_some_and(|c| is_json_whitespace(*c)) {
                    chars.next();
                }
                out.push(ch);
                if chars.peek() == Some(&close) {
                    chars.next();
                    out.push(close);
                } else {
                    depth += 1;
                    push_newline(out, depth);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                push_newline(out, depth);
                out.push(ch);
            }
            ',' => {
                out.push(',');
                push_newline(out, depth);
            }
            ':' => out.push_str(": "),
            c if is_json_whitespace(c) => {}
            c => out.push(c),
        }
    }
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn push_newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth * INDENT_WIDTH as usize {
        out.push(' ');
    }
}

fn format_css(text: &str) -> Result<String, FormatError> {
    let options = malva::config::FormatOptions::default();
    malva::format_text(text, malva::Syntax::Css, &options)
        .map_err(|e| FormatError::Syntax(format!("{e:?}")))
}

/// `<style>` and `<script>` bodies are handed to the CSS and script
/// formatters; other embedded code is left as written.
fn format_markup(text: &str, language: markup_fmt::Language) -> Result<String, FormatError> {
    let options = markup_fmt::config::FormatOptions::default();
    markup_fmt::format_text(text, language, &options, |code, hints| {
        match hints.ext {
            "css" => Ok(format_css(code).map(Cow::Owned)?),
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "mts" | "cts" | "tsx" => {
                Ok(format_script(code, hints.ext).map(Cow::Owned)?)
            }
            _ => Ok(Cow::Borrowed(code)),
        }
    })
    .map_err(syntax_error)
}

fn format_yaml(text: &str) -> Result<String, FormatError> {
    let options = pretty_yaml::config::FormatOptions::default();
    pretty_yaml::format_text(text, &options).map_err(syntax_error)
}

fn format_markdown(text: &str) -> Result<String, FormatError> {
    let config = dprint_plugin_markdown::configuration::ConfigurationBuilder::new()
        .line_width(PRINT_WIDTH)
        .build();
    let formatted =
        dprint_plugin_markdown::format_text(text, &config, |_tag, _code, _width| Ok(None))
            .map_err(syntax_error)?;
    Ok(formatted.unwrap_or_else(|| text.to_string()))
}

/// JavaScript and TypeScript, with the dialect picked from `extension`.
fn format_script(text: &str, extension: &str) -> Result<String, FormatError> {
    let config = dprint_plugin_typescript::configuration::ConfigurationBuilder::new()
        .line_width(PRINT_WIDTH)
        .indent_width(INDENT_WIDTH)
        .build();
    let file_name = format!("document.{extension}");
    let formatted =
        dprint_plugin_typescript::format_text(dprint_plugin_typescript::FormatTextOptions {
            path: Path::new(&file_name),
            extension: Some(extension),
            text: text.to_string(),
            config: &config,
            external_formatter: None,
        })
        .map_err(syntax_error)?;
    Ok(formatted.unwrap_or_else(|| text.to_string()))
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/formatter.rs"]
mod tests;
