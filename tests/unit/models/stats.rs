use super::*;

#[test]
fn stats_count_lines_words_and_utf16_length() {
    let stats = DocumentStats::of("hello world\nsecond line");
    assert_eq!(stats.lines, 2);
    assert_eq!(stats.words, 4);
    assert_eq!(stats.len_utf16, 23);
}

#[test]
fn empty_text_is_one_line_and_no_words() {
    assert_eq!(
        DocumentStats::of(""),
        DocumentStats {
            lines: 1,
            words: 0,
            len_utf16: 0,
        }
    );
}

#[test]
fn astral_characters_count_as_two_code_units() {
    let stats = DocumentStats::of("😀");
    assert_eq!(stats.len_utf16, 2);
}

#[test]
fn id_allocator_never_reissues_observed_ids() {
    let mut ids = IdAllocator::new();
    assert_eq!(ids.next_raw(), 1);
    ids.observe(7);
    assert_eq!(ids.next_raw(), 8);
    ids.observe(3);
    assert_eq!(ids.next_raw(), 9);
}

#[test]
fn ids_accept_numbers_and_legacy_strings() {
    let ids: Vec<TabId> = serde_json::from_str(r#"[4, "17", "1699999999999"]"#).unwrap();
    assert_eq!(
        ids,
        vec![TabId::new(4), TabId::new(17), TabId::new(1_699_999_999_999)]
    );

    let folder: FolderId = serde_json::from_str(r#""folder-3""#).unwrap();
    assert_eq!(folder, FolderId::new(3));

    assert!(serde_json::from_str::<TabId>(r#""abc""#).is_err());
    assert!(serde_json::from_str::<TabId>("-1").is_err());
    assert_eq!(serde_json::to_string(&TabId::new(9)).unwrap(), "9");
}

#[test]
fn theme_toggles_and_parses() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::parse(" DARK "), Some(Theme::Dark));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
}
