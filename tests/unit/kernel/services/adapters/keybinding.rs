use super::*;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn default_global_bindings() {
    let service = KeybindingService::new();
    let global = KeybindingContext::Global;
    assert_eq!(
        service.resolve(global, &Key::ctrl(KeyCode::Char('j'))),
        Some(Command::NewTab)
    );
    assert_eq!(
        service.resolve(global, &Key::ctrl(KeyCode::Char('s'))),
        Some(Command::Save)
    );
    assert_eq!(
        service.resolve(global, &Key::ctrl_shift(KeyCode::Char('s'))),
        Some(Command::Download)
    );
    assert_eq!(
        service.resolve(global, &Key::shift_alt(KeyCode::Char('f'))),
        Some(Command::Format)
    );
}

#[test]
fn tab_and_comment_are_scoped_to_editor() {
    let service = KeybindingService::new();
    let tab = Key::simple(KeyCode::Tab);
    let slash = Key::ctrl(KeyCode::Char('/'));
    assert_eq!(service.resolve(KeybindingContext::Global, &tab), None);
    assert_eq!(service.resolve(KeybindingContext::Global, &slash), None);
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &tab),
        Some(Command::InsertIndent)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &slash),
        Some(Command::ToggleComment)
    );
}

#[test]
fn global_commands_fall_through_in_editor() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::ctrl(KeyCode::Char('l'))),
        Some(Command::ToggleSidebar)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::Esc)),
        Some(Command::Escape)
    );
}

#[test]
fn rules_override_and_unbind_defaults() {
    let mut service = KeybindingService::new();
    let applied = service.apply_rules(&[
        rule("ctrl+n", "newTab", None),
        rule("ctrl+j", "", None),
        rule("ctrl+shift+c", "toggleComment", Some("editor")),
    ]);
    assert_eq!(applied, 3);
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('n'))),
        Some(Command::NewTab)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('j'))),
        None
    );
    assert_eq!(
        service.resolve(
            KeybindingContext::Editor,
            &Key::ctrl_shift(KeyCode::Char('c'))
        ),
        Some(Command::ToggleComment)
    );
}

#[test]
fn invalid_rules_are_skipped() {
    let service = KeybindingService::from_rules(&[
        rule("ctrl+", "save", None),
        rule("ctrl+s", "noSuchCommand", None),
        rule("ctrl+s", "save", Some("palette")),
    ]);
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('s'))),
        Some(Command::Save)
    );
    assert_eq!(
        service.bindings(KeybindingContext::Editor).len(),
        KeybindingService::new().bindings(KeybindingContext::Editor).len()
    );
}
