use thiserror::Error;

use crate::kernel::language::LanguageId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Formatting not supported for {}", .0.display_name())]
    Unsupported(LanguageId),
    #[error("{0}")]
    Syntax(String),
}

/// Whole-document reformatting. Either returns the full new text or fails
/// without side effects.
pub trait CodeFormatter: Send + Sync {
    fn supports(&self, language: LanguageId) -> bool;
    fn format(&self, text: &str, language: LanguageId) -> Result<String, FormatError>;
}
