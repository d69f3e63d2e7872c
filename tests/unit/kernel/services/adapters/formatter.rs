use super::*;

fn format(text: &str, language: LanguageId) -> Result<String, FormatError> {
    BuiltinFormatter::new().format(text, language)
}

#[test]
fn json_is_reindented_with_two_spaces() {
    let out = format(r#"{"b":1,"a":[true,null]}"#, LanguageId::Json).unwrap();
    assert_eq!(
        out,
        "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}\n"
    );
}

#[test]
fn json_keeps_number_literals_and_string_escapes() {
    let out = format(
        r#"{"big": 12345678901234567890123, "e": 1e2, "f": -0.10, "s": "a\"b, {c}: [d]"}"#,
        LanguageId::Json,
    )
    .unwrap();
    assert_eq!(
        out,
        "{\n  \"big\": 12345678901234567890123,\n  \"e\": 1e2,\n  \"f\": -0.10,\n  \"s\": \"a\\\"b, {c}: [d]\"\n}\n"
    );
}

#[test]
fn json_empty_containers_stay_on_one_line() {
    let out = format("{ \"a\" : { } , \"b\" : [\n ] }", LanguageId::Json).unwrap();
    assert_eq!(out, "{\n  \"a\": {},\n  \"b\": []\n}\n");
}

#[test]
fn invalid_json_is_a_syntax_error() {
    let err = format("{ a:1 }", LanguageId::Json).unwrap_err();
    assert!(matches!(err, FormatError::Syntax(_)));
}

#[test]
fn css_is_formatted() {
    let out = format("a{color:red}", LanguageId::Css).unwrap();
    assert!(out.contains("color: red;"));
    assert_ne!(out, "a{color:red}");
}

#[test]
fn html_attributes_are_normalized() {
    let out = format("<div   class=\"a\"  >hi</div>", LanguageId::Html).unwrap();
    assert!(out.contains("<div class=\"a\">"), "{out}");
    assert!(out.contains("hi"));
}

#[test]
fn html_style_block_goes_through_css_formatter() {
    let out = format("<style>a{color:red}</style>", LanguageId::Html).unwrap();
    assert!(out.contains("color: red;"), "{out}");
}

#[test]
fn xml_is_formatted() {
    let out = format("<root><item   id=\"1\"/></root>", LanguageId::Xml).unwrap();
    assert!(out.contains("<item id=\"1\""), "{out}");
}

#[test]
fn yaml_spacing_is_normalized() {
    let out = format("a:   1\nb:\n    - x\n", LanguageId::Yaml).unwrap();
    assert!(out.contains("a: 1"), "{out}");
    assert!(out.contains("- x"));
}

#[test]
fn markdown_heading_spacing_is_normalized() {
    let out = format("#   Title\n\n\n\nbody\n", LanguageId::Markdown).unwrap();
    assert!(out.starts_with("# Title\n\nbody"), "{out}");
}

#[test]
fn script_languages_are_formatted() {
    let js = format("const  a=1", LanguageId::JavaScript).unwrap();
    assert_eq!(js, "const a = 1;\n");

    let ts = format("let x:number=1", LanguageId::TypeScript).unwrap();
    assert_eq!(ts, "let x: number = 1;\n");

    let jsx = format("const el=<b>hi</b>", LanguageId::Jsx).unwrap();
    assert!(jsx.starts_with("const el = <b>hi</b>;"), "{jsx}");

    let tsx = format("const el:JSX.Element=<b/>", LanguageId::Tsx).unwrap();
    assert!(tsx.starts_with("const el: JSX.Element = <b"), "{tsx}");
}

#[test]
fn invalid_script_is_a_syntax_error() {
    let err = format("const = ;", LanguageId::TypeScript).unwrap_err();
    assert!(matches!(err, FormatError::Syntax(_)));
}

#[test]
fn languages_without_a_formatter_are_unsupported() {
    let formatter = BuiltinFormatter::new();
    assert!(formatter.supports(LanguageId::Json));
    assert!(formatter.supports(LanguageId::Yaml));
    assert!(!formatter.supports(LanguageId::Python));
    assert_eq!(
        formatter.format("x = 1", LanguageId::Python),
        Err(FormatError::Unsupported(LanguageId::Python))
    );
}
