//! Editor domain: text edits, formatting state and highlight projection.

pub mod edit;
pub mod format;
pub mod syntax;

pub use edit::{insert_indent, toggle_line_comment, TextEdit};
pub use format::{FormatNotice, FormatRequest, FormatStart, FormatState};
pub use syntax::{highlight, project, HighlightKind, HighlightSpan, Projection, ProjectionCache};
