use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Python,
    Html,
    Css,
    Json,
    Markdown,
    Bash,
    Sql,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Rust,
    Php,
    Ruby,
    Swift,
    Kotlin,
    Yaml,
    Xml,
}

/// Line comment delimiters. `end` is only set for block-style languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub start: &'static str,
    pub end: Option<&'static str>,
}

impl CommentSyntax {
    const fn line(start: &'static str) -> Self {
        Self { start, end: None }
    }

    const fn block(start: &'static str, end: &'static str) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

const SLASHES: CommentSyntax = CommentSyntax::line("// ");
const HASH: CommentSyntax = CommentSyntax::line("# ");

/// Tree-sitter grammar used by the highlight projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Rust,
    Go,
    Python,
    C,
    Cpp,
    Java,
    JavaScript,
    TypeScript,
    Tsx,
    Json,
    Yaml,
    Html,
    Xml,
    Css,
    Bash,
    Markdown,
    Sql,
    CSharp,
    Php,
    Ruby,
    Swift,
    Kotlin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    Json,
    Css,
    Html,
    Xml,
    Yaml,
    Markdown,
    /// JavaScript and TypeScript, JSX included.
    Script,
}

impl LanguageId {
    /// Languages offered in the language menu, in menu order.
    pub const MENU: [Self; 23] = [
        Self::PlainText,
        Self::JavaScript,
        Self::Jsx,
        Self::TypeScript,
        Self::Tsx,
        Self::Python,
        Self::Html,
        Self::Css,
        Self::Json,
        Self::Markdown,
        Self::Bash,
        Self::Sql,
        Self::Java,
        Self::Cpp,
        Self::CSharp,
        Self::Go,
        Self::Rust,
        Self::Php,
        Self::Ruby,
        Self::Swift,
        Self::Kotlin,
        Self::Yaml,
        Self::Xml,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::PlainText => "plaintext",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Python => "python",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Bash => "bash",
            Self::Sql => "sql",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        if id == Self::C.id() {
            return Some(Self::C);
        }
        Self::MENU.into_iter().find(|lang| lang.id() == id)
    }

    /// Unknown ids display as plain text rather than failing.
    pub fn from_id_or_plaintext(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::PlainText => "Plain Text",
            Self::JavaScript => "JavaScript",
            Self::Jsx => "JSX",
            Self::TypeScript => "TypeScript",
            Self::Tsx => "TSX",
            Self::Python => "Python",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::Bash => "Bash",
            Self::Sql => "SQL",
            Self::Java => "Java",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Php => "PHP",
            Self::Ruby => "Ruby",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Yaml => "YAML",
            Self::Xml => "XML",
        }
    }

    /// Extension appended to a tab name without a dot when exporting.
    pub fn default_extension(self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::JavaScript => "js",
            Self::Jsx => "jsx",
            Self::TypeScript => "ts",
            Self::Tsx => "tsx",
            Self::Python => "py",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Bash => "sh",
            Self::Sql => "sql",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "cs",
            Self::Go => "go",
            Self::Rust => "rs",
            Self::Php => "php",
            Self::Ruby => "rb",
            Self::Swift => "swift",
            Self::Kotlin => "kt",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        let lang = match ext.to_ascii_lowercase().as_str() {
            "txt" | "toml" | "ini" | "cfg" | "env" | "gitignore" => Self::PlainText,
            "js" | "mjs" => Self::JavaScript,
            "jsx" => Self::Jsx,
            "ts" => Self::TypeScript,
            "tsx" => Self::Tsx,
            "py" => Self::Python,
            "css" => Self::Css,
            "html" | "htm" => Self::Html,
            "xml" => Self::Xml,
            "json" => Self::Json,
            "md" => Self::Markdown,
            "sh" | "dockerfile" | "makefile" => Self::Bash,
            "sql" => Self::Sql,
            "java" => Self::Java,
            "c" | "h" => Self::C,
            "cpp" | "hpp" => Self::Cpp,
            "cs" => Self::CSharp,
            "go" => Self::Go,
            "rs" => Self::Rust,
            "php" => Self::Php,
            "rb" => Self::Ruby,
            "swift" => Self::Swift,
            "kt" => Self::Kotlin,
            "yaml" | "yml" => Self::Yaml,
            _ => return None,
        };
        Some(lang)
    }

    /// Language for a file name; names without a dot are looked up whole
    /// (so `Makefile` resolves like the `makefile` extension).
    pub fn detect(file_name: &str) -> Self {
        file_extension(file_name)
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }

    /// `None` only for plain text; every other language falls back to `// `.
    pub fn comment_syntax(self) -> Option<CommentSyntax> {
        let syntax = match self {
            Self::PlainText => return None,
            Self::Python | Self::Bash | Self::Ruby | Self::Yaml => HASH,
            Self::Html | Self::Xml => CommentSyntax::block("<!-- ", " -->"),
            Self::Css => CommentSyntax::block("/* ", " */"),
            Self::Sql => CommentSyntax::line("-- "),
            _ => SLASHES,
        };
        Some(syntax)
    }

    pub fn grammar(self) -> Option<Grammar> {
        match self {
            Self::Rust => Some(Grammar::Rust),
            Self::Go => Some(Grammar::Go),
            Self::Python => Some(Grammar::Python),
            Self::C => Some(Grammar::C),
            Self::Cpp => Some(Grammar::Cpp),
            Self::Java => Some(Grammar::Java),
            Self::JavaScript | Self::Jsx => Some(Grammar::JavaScript),
            Self::TypeScript => Some(Grammar::TypeScript),
            Self::Tsx => Some(Grammar::Tsx),
            Self::Json => Some(Grammar::Json),
            Self::Yaml => Some(Grammar::Yaml),
            Self::Html => Some(Grammar::Html),
            Self::Xml => Some(Grammar::Xml),
            Self::Css => Some(Grammar::Css),
            Self::Bash => Some(Grammar::Bash),
            Self::Markdown => Some(Grammar::Markdown),
            Self::Sql => Some(Grammar::Sql),
            Self::CSharp => Some(Grammar::CSharp),
            Self::Php => Some(Grammar::Php),
            Self::Ruby => Some(Grammar::Ruby),
            Self::Swift => Some(Grammar::Swift),
            Self::Kotlin => Some(Grammar::Kotlin),
            Self::PlainText => None,
        }
    }

    pub fn formatter(self) -> Option<FormatterKind> {
        match self {
            Self::Json => Some(FormatterKind::Json),
            Self::Css => Some(FormatterKind::Css),
            Self::Html => Some(FormatterKind::Html),
            Self::Xml => Some(FormatterKind::Xml),
            Self::Yaml => Some(FormatterKind::Yaml),
            Self::Markdown => Some(FormatterKind::Markdown),
            Self::JavaScript | Self::Jsx | Self::TypeScript | Self::Tsx => {
                Some(FormatterKind::Script)
            }
            _ => None,
        }
    }
}

impl Serialize for LanguageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for LanguageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = Option::<String>::deserialize(deserializer)?;
        Ok(id
            .as_deref()
            .map(Self::from_id_or_plaintext)
            .unwrap_or_default())
    }
}

fn file_extension(file_name: &str) -> Option<&str> {
    file_name.rsplit('.').next().filter(|ext| !ext.is_empty())
}

const EXTRA_TEXT_EXTENSIONS: [&str; 12] = [
    "log",
    "csv",
    "tsv",
    "svg",
    "lock",
    "conf",
    "config",
    "editorconfig",
    "prettierrc",
    "eslintrc",
    "babelrc",
    "bash",
];

/// Whether a directory import should pick the file up as a tab.
pub fn is_text_file(file_name: &str) -> bool {
    if !file_name.contains('.') {
        return true;
    }
    let Some(ext) = file_extension(file_name) else {
        return true;
    };
    let ext = ext.to_ascii_lowercase();
    LanguageId::from_extension(&ext).is_some() || EXTRA_TEXT_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
