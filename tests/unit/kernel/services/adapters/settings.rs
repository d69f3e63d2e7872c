use super::*;
use crate::models::Theme;
use tempfile::tempdir;

#[test]
fn parse_keybinding_handles_modifiers_and_case() {
    assert_eq!(
        parse_keybinding("ctrl+shift+s"),
        Some(Key::ctrl_shift(KeyCode::Char('s')))
    );
    assert_eq!(
        parse_keybinding("Ctrl+S"),
        Some(Key::ctrl_shift(KeyCode::Char('s')))
    );
    assert_eq!(
        parse_keybinding("shift+alt+f"),
        Some(Key::shift_alt(KeyCode::Char('f')))
    );
    assert_eq!(parse_keybinding("ctrl+slash"), Some(Key::ctrl(KeyCode::Char('/'))));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}

#[test]
fn missing_or_malformed_settings_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(load_settings_from(&path), Settings::default());

    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn partial_settings_fill_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"theme":"dark","editor":{"autosave_delay_ms":500},"keybindings":[{"key":"ctrl+n","command":"newTab"}]}"#,
    )
    .unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(settings.theme, Some(Theme::Dark));
    assert_eq!(settings.editor.indent_width, 2);
    assert_eq!(settings.editor.autosave_delay_ms, Some(500));
    assert_eq!(settings.keybindings.len(), 1);
}

#[test]
fn default_settings_file_is_written_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".notepad").join("settings.json");
    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());

    std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();
    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path).theme, Some(Theme::Dark));
}
