use super::*;

fn kind_at(projection: &Projection, needle: &str) -> Option<HighlightKind> {
    let idx = projection.text.find(needle)?;
    projection
        .spans
        .iter()
        .find(|s| s.start <= idx && idx < s.end)
        .map(|s| s.kind)
}

#[test]
fn test_plaintext_projection_is_identity() {
    let p = project("fn main() {}", LanguageId::PlainText);
    assert!(p.is_plain());
    assert_eq!(p.text, "fn main() {}");
}

#[test]
fn test_sql_keywords_comments_and_literals() {
    let p = project(
        "-- list\nselect name FROM users WHERE id = 42 AND note = 'it''s';\n",
        LanguageId::Sql,
    );
    assert_eq!(kind_at(&p, "-- list"), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&p, "select"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "FROM"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "WHERE"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "42"), Some(HighlightKind::Number));
    assert_eq!(kind_at(&p, "'it''s'"), Some(HighlightKind::String));
    assert_eq!(kind_at(&p, "users"), None);
}

#[test]
fn test_sql_fallback_fills_only_unmarked_text() {
    let text = "SELECT 1 -- a\nFROM t";
    let existing = [HighlightSpan {
        start: 0,
        end: 6,
        kind: HighlightKind::Keyword,
    }];
    let spans = sql::fallback_spans(text, &existing);
    let kinds: Vec<(&str, HighlightKind)> = spans
        .iter()
        .map(|s| (&text[s.start..s.end], s.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("1", HighlightKind::Number),
            ("-- a", HighlightKind::Comment),
            ("FROM", HighlightKind::Keyword),
        ]
    );
}

#[test]
fn test_markdown_headings_and_code_blocks() {
    let p = project("# Title\n\n```\nlet x\n```\n", LanguageId::Markdown);
    assert_eq!(kind_at(&p, "# Title"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "let x"), Some(HighlightKind::String));
}

#[test]
fn test_csharp_keywords_and_strings() {
    let p = project(
        "using System;\nclass A { string s = \"x\"; } // c\n",
        LanguageId::CSharp,
    );
    assert_eq!(kind_at(&p, "using"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "class"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "\"x\""), Some(HighlightKind::String));
    assert_eq!(kind_at(&p, "// c"), Some(HighlightKind::Comment));
}

#[test]
fn test_php_functions_and_variables() {
    let p = project(
        "<?php\nfunction greet($n) { echo \"hi\"; }\n",
        LanguageId::Php,
    );
    assert_eq!(kind_at(&p, "function"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "greet"), Some(HighlightKind::Function));
    assert_eq!(kind_at(&p, "$n"), Some(HighlightKind::Property));
    assert_eq!(kind_at(&p, "\"hi\""), Some(HighlightKind::String));
}

#[test]
fn test_ruby_keywords_do_not_swallow_bodies() {
    let p = project("# c\ndef hello\n  puts \"hi\"\nend\n", LanguageId::Ruby);
    assert_eq!(kind_at(&p, "# c"), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&p, "def"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "hello"), Some(HighlightKind::Function));
    assert_eq!(kind_at(&p, "\"hi\""), Some(HighlightKind::String));
    assert_eq!(kind_at(&p, "end"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "puts"), None);
}

#[test]
fn test_swift_function_declaration() {
    let p = project(
        "// c\nfunc greet() -> String { return \"hi\" }\n",
        LanguageId::Swift,
    );
    assert_eq!(kind_at(&p, "// c"), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&p, "func"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "greet"), Some(HighlightKind::Function));
    assert_eq!(kind_at(&p, "\"hi\""), Some(HighlightKind::String));
}

#[test]
fn test_kotlin_keywords_and_numbers() {
    let p = project("// c\nfun main() { val x = 1 }\n", LanguageId::Kotlin);
    assert_eq!(kind_at(&p, "// c"), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&p, "fun"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "val"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "1"), Some(HighlightKind::Number));
}

#[test]
fn test_rust_comment_keyword_string() {
    let p = project("fn main() { let s = \"x\"; } // hi\n", LanguageId::Rust);
    assert_eq!(kind_at(&p, "fn"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "\"x\""), Some(HighlightKind::String));
    assert_eq!(kind_at(&p, "// hi"), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&p, "main"), Some(HighlightKind::Function));
}

#[test]
fn test_python_keyword_and_comment() {
    let p = project("# hi\ndef f():\n    return 1\n", LanguageId::Python);
    assert_eq!(kind_at(&p, "# hi"), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&p, "def"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "return"), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&p, "1"), Some(HighlightKind::Number));
}

#[test]
fn test_jsx_uses_javascript_grammar() {
    let p = project("const a = 1;", LanguageId::Jsx);
    assert_eq!(kind_at(&p, "const"), Some(HighlightKind::Keyword));
}

#[test]
fn test_json_keys_are_properties() {
    let p = project("{\"a\": true}", LanguageId::Json);
    assert_eq!(kind_at(&p, "\"a\""), Some(HighlightKind::Property));
    assert_eq!(kind_at(&p, "true"), Some(HighlightKind::Constant));
}

#[test]
fn test_html_tags_and_attributes() {
    let p = project("<a href=\"x\">t</a>", LanguageId::Html);
    assert_eq!(kind_at(&p, "a href"), Some(HighlightKind::Tag));
    assert_eq!(kind_at(&p, "href"), Some(HighlightKind::Property));
}

#[test]
fn test_spans_are_sorted_and_disjoint() {
    let p = project(
        "fn a() -> u32 { 1 }\nfn b() { a(); /* c */ }\n",
        LanguageId::Rust,
    );
    for pair in p.spans.windows(2) {
        assert!(pair[0].end <= pair[1].start, "{pair:?}");
    }
}

#[test]
fn test_markup_escapes_and_wraps() {
    let p = project("// <b>\n", LanguageId::JavaScript);
    assert_eq!(
        p.to_markup(),
        "<span class=\"hl-comment\">// &lt;b&gt;</span>\n"
    );
    assert_eq!(highlight("a < b", LanguageId::PlainText), "a &lt; b");
}

#[test]
fn test_markup_preserves_text_when_tags_are_stripped() {
    let src = "let x = \"a&b\"; // done";
    let markup = highlight(src, LanguageId::TypeScript);
    let stripped = regex::Regex::new("<[^>]+>").unwrap().replace_all(&markup, "");
    let unescaped = stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    assert_eq!(unescaped, src);
}

#[test]
fn test_cache_reprojects_on_new_version_or_language() {
    let mut cache = ProjectionCache::default();
    let id = TabId::new(1);
    let first = cache
        .get_or_project(id, 0, LanguageId::Rust, "fn a() {}")
        .clone();
    assert!(!first.is_plain());

    let same = cache.get_or_project(id, 0, LanguageId::Rust, "ignored");
    assert_eq!(same.text, "fn a() {}");

    let plain = cache.get_or_project(id, 0, LanguageId::PlainText, "fn a() {}");
    assert!(plain.is_plain());

    let next = cache.get_or_project(id, 1, LanguageId::PlainText, "new");
    assert_eq!(next.text, "new");
}
