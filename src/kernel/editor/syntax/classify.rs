use tree_sitter::Node;

use super::{sql, HighlightKind};
use crate::kernel::language::Grammar;

pub(super) fn classify_node(grammar: Grammar, node: Node<'_>) -> Option<HighlightKind> {
    let kind = node.kind();
    if is_comment_kind(kind) {
        return Some(HighlightKind::Comment);
    }
    if let Some(markup) = classify_markup(grammar, node) {
        return Some(markup);
    }
    if is_string_kind(kind) {
        return Some(HighlightKind::String);
    }
    if is_number_kind(kind) {
        return Some(HighlightKind::Number);
    }
    if matches!(
        kind,
        "type_identifier" | "primitive_type" | "predefined_type" | "integral_type"
    ) {
        return Some(HighlightKind::Type);
    }
    if matches!(
        kind,
        "attribute_item" | "inner_attribute_item" | "decorator" | "annotation" | "marker_annotation"
    ) {
        return Some(HighlightKind::Attribute);
    }
    if matches!(
        kind,
        "true" | "false" | "null" | "none" | "nil" | "boolean_scalar" | "null_scalar" | "TRUE"
            | "FALSE" | "NULL"
    ) {
        return Some(HighlightKind::Constant);
    }
    if is_function_name(node) {
        return Some(HighlightKind::Function);
    }
    // Some grammars reuse keyword spellings for whole constructs (Ruby `class`).
    if node.child_count() == 0 && is_keyword(grammar, kind) {
        return Some(HighlightKind::Keyword);
    }
    None
}

fn is_comment_kind(kind: &str) -> bool {
    kind.contains("comment") || kind == "Comment"
}

fn is_string_kind(kind: &str) -> bool {
    kind.contains("string")
        || kind.contains("regex")
        || matches!(kind, "char_literal" | "byte_literal" | "character_literal")
}

fn is_number_kind(kind: &str) -> bool {
    kind.contains("integer")
        || kind.contains("float")
        || kind.contains("number")
        || kind == "real_literal"
        || (kind.ends_with("_literal") && (kind.contains("int") || kind.contains("imaginary")))
}

fn is_function_name(node: Node<'_>) -> bool {
    if !matches!(
        node.kind(),
        "identifier" | "field_identifier" | "property_identifier" | "simple_identifier" | "name"
    ) {
        return false;
    }
    let Some(parent) = node.parent() else {
        return false;
    };
    let field = match parent.kind() {
        "function_item" | "function_declaration" | "function_definition" | "method_declaration"
        | "method_definition" | "method" => "name",
        "call_expression" | "call" | "function_call_expression" => "function",
        _ => return false,
    };
    parent
        .child_by_field_name(field)
        .is_some_and(|named| named.id() == node.id())
}

fn classify_markup(grammar: Grammar, node: Node<'_>) -> Option<HighlightKind> {
    match grammar {
        Grammar::Html => match node.kind() {
            "tag_name" => Some(HighlightKind::Tag),
            "attribute_name" => Some(HighlightKind::Property),
            "attribute_value" | "quoted_attribute_value" => Some(HighlightKind::String),
            _ => None,
        },
        Grammar::Xml => match node.kind() {
            "AttValue" | "PseudoAttValue" => Some(HighlightKind::String),
            "Name" => match node.parent()?.kind() {
                "STag" | "ETag" | "EmptyElemTag" => Some(HighlightKind::Tag),
                "Attribute" | "AttDef" | "PseudoAtt" => Some(HighlightKind::Property),
                _ => None,
            },
            _ => None,
        },
        Grammar::Css => match node.kind() {
            "tag_name" | "class_name" | "id_name" | "pseudo_class_selector"
            | "pseudo_element_selector" => Some(HighlightKind::Tag),
            "property_name" | "feature_name" => Some(HighlightKind::Property),
            "color_value" | "integer_value" | "float_value" => Some(HighlightKind::Number),
            "at_keyword" | "important" => Some(HighlightKind::Keyword),
            "function_name" => Some(HighlightKind::Function),
            _ => None,
        },
        Grammar::Bash => match node.kind() {
            "command_name" => Some(HighlightKind::Function),
            "variable_name" => Some(HighlightKind::Property),
            _ => None,
        },
        Grammar::Markdown => match node.kind() {
            "atx_heading" | "setext_heading" | "thematic_break" => Some(HighlightKind::Keyword),
            "fenced_code_block" | "indented_code_block" | "link_destination" => {
                Some(HighlightKind::String)
            }
            "block_quote" => Some(HighlightKind::Comment),
            "link_label" => Some(HighlightKind::Property),
            kind if kind.starts_with("list_marker_") => Some(HighlightKind::Keyword),
            _ => None,
        },
        Grammar::Ruby => match node.kind() {
            "constant" => Some(HighlightKind::Type),
            "simple_symbol" | "hash_key_symbol" => Some(HighlightKind::Constant),
            "instance_variable" | "class_variable" | "global_variable" => {
                Some(HighlightKind::Property)
            }
            _ => None,
        },
        Grammar::Php => match node.kind() {
            "php_tag" => Some(HighlightKind::Tag),
            "variable_name" => Some(HighlightKind::Property),
            _ => None,
        },
        Grammar::Json => {
            let parent = node.parent()?;
            (parent.kind() == "pair"
                && parent
                    .child_by_field_name("key")
                    .is_some_and(|key| key.id() == node.id()))
            .then_some(HighlightKind::Property)
        }
        _ => None,
    }
}

fn is_keyword(grammar: Grammar, kind: &str) -> bool {
    match grammar {
        Grammar::Rust => RUST_KEYWORDS.contains(&kind),
        Grammar::Go => GO_KEYWORDS.contains(&kind),
        Grammar::Python => PYTHON_KEYWORDS.contains(&kind),
        Grammar::C | Grammar::Cpp | Grammar::Java => C_FAMILY_KEYWORDS.contains(&kind),
        Grammar::JavaScript | Grammar::TypeScript | Grammar::Tsx => JS_KEYWORDS.contains(&kind),
        Grammar::Bash => BASH_KEYWORDS.contains(&kind),
        Grammar::Sql => sql::is_keyword_kind(kind),
        Grammar::CSharp => CSHARP_KEYWORDS.contains(&kind),
        Grammar::Php => PHP_KEYWORDS.contains(&kind),
        Grammar::Ruby => RUBY_KEYWORDS.contains(&kind),
        Grammar::Swift => SWIFT_KEYWORDS.contains(&kind),
        Grammar::Kotlin => KOTLIN_KEYWORDS.contains(&kind),
        Grammar::Json
        | Grammar::Yaml
        | Grammar::Html
        | Grammar::Xml
        | Grammar::Css
        | Grammar::Markdown => false,
    }
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "type",
    "unsafe", "use", "where", "while",
];

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise",
    "return", "try", "while", "with", "yield",
];

const C_FAMILY_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "default", "delete", "do", "else",
    "enum", "extends", "extern", "final", "for", "goto", "if", "implements", "import",
    "include", "interface", "namespace", "new", "package", "private", "protected", "public",
    "return", "sizeof", "static", "struct", "switch", "template", "this", "throw", "throws",
    "try", "typedef", "typename", "union", "using", "virtual", "void", "volatile", "while",
    "#include", "#define", "#ifdef", "#ifndef", "#endif", "#if", "#else",
];

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
    "function", "if", "import", "in", "instanceof", "interface", "let", "new", "of",
    "private", "protected", "public", "readonly", "return", "static", "super", "switch",
    "this", "throw", "try", "type", "typeof", "undefined", "var", "void", "while", "with",
    "yield",
];

const BASH_KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "until", "do", "done",
    "in", "function", "select", "return", "exit", "local", "declare", "export", "readonly",
    "unset",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "base", "break", "case", "catch", "class", "const",
    "continue", "default", "delegate", "do", "else", "enum", "event", "foreach", "for", "get",
    "if", "in", "init", "interface", "internal", "is", "namespace", "new", "out", "override",
    "partial", "private", "protected", "public", "readonly", "record", "ref", "return",
    "sealed", "set", "static", "struct", "switch", "this", "throw", "try", "using", "var",
    "virtual", "void", "while", "yield",
];

const PHP_KEYWORDS: &[&str] = &[
    "abstract", "as", "break", "case", "catch", "class", "const", "continue", "default", "do",
    "echo", "else", "elseif", "enum", "extends", "final", "finally", "fn", "for", "foreach",
    "function", "if", "implements", "include", "interface", "match", "namespace", "new",
    "private", "protected", "public", "readonly", "require", "require_once", "return",
    "static", "switch", "throw", "trait", "try", "use", "while", "yield",
];

const RUBY_KEYWORDS: &[&str] = &[
    "alias", "and", "begin", "break", "case", "class", "def", "do", "else", "elsif", "end",
    "ensure", "for", "if", "in", "module", "next", "not", "or", "redo", "rescue", "retry",
    "return", "self", "super", "then", "undef", "unless", "until", "when", "while", "yield",
];

const SWIFT_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "case", "catch", "class", "continue", "default", "defer",
    "do", "else", "enum", "extension", "fallthrough", "for", "func", "guard", "if", "import",
    "in", "init", "let", "private", "protocol", "public", "return", "self", "static", "struct",
    "switch", "throw", "throws", "try", "var", "where", "while",
];

const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "by", "class", "companion", "continue", "data", "do", "else", "enum", "fun",
    "for", "if", "import", "in", "interface", "is", "object", "override", "package", "private",
    "public", "return", "sealed", "super", "this", "throw", "try", "val", "var", "when",
    "while",
];
