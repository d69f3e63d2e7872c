use super::*;
use crate::core::Command;
use crate::kernel::context_menu::{ContextMenuItem, ContextMenuTarget};
use crate::kernel::dnd::{DragPayload, DropTarget};
use crate::kernel::editor::FormatNotice;
use crate::kernel::persistence::SaveStatus;
use crate::kernel::scheduler::ManualClock;
use crate::kernel::services::ports::{FormatError, OpenedFile};
use crate::kernel::state::RenameTarget;
use crate::models::{FileHandle, TabId, Theme};
use std::time::Duration;

fn new_store() -> (Store, ManualClock) {
    let clock = ManualClock::new();
    let store = Store::new(AppState::default(), Arc::new(clock.clone()));
    (store, clock)
}

fn active_id(store: &Store) -> TabId {
    store.state().workspace.active_tab_id().unwrap()
}

fn persisted(effects: &[Effect]) -> Option<&crate::kernel::persistence::WorkspaceSnapshot> {
    effects.iter().find_map(|e| match e {
        Effect::PersistWorkspace(snapshot) => Some(snapshot),
        _ => None,
    })
}

fn format_request(effects: &[Effect]) -> (TabId, u64) {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::FormatTab {
                tab_id, request_id, ..
            } => Some((*tab_id, *request_id)),
            _ => None,
        })
        .expect("format effect")
}

#[test]
fn test_autosave_fires_after_quiet_period() {
    let (mut store, clock) = new_store();
    store.dispatch(Action::UpdateContent("hello".into()));
    assert!(store.state().autosave.timer.is_armed());

    clock.advance(Duration::from_secs(2));
    assert!(persisted(&store.dispatch(Action::Tick).effects).is_none());

    clock.advance(Duration::from_secs(1));
    let result = store.dispatch(Action::Tick);
    let snapshot = persisted(&result.effects).expect("autosave");
    assert!(snapshot.tabs_json.contains("hello"));
    assert_eq!(
        store.state().autosave.status.get(),
        Some(&SaveStatus::Saving)
    );
}

#[test]
fn test_autosave_debounce_is_trailing() {
    let (mut store, clock) = new_store();
    store.dispatch(Action::UpdateContent("a".into()));
    clock.advance(Duration::from_secs(2));
    store.dispatch(Action::UpdateContent("ab".into()));
    clock.advance(Duration::from_secs(2));
    assert!(store.dispatch(Action::Tick).effects.is_empty());
    clock.advance(Duration::from_secs(1));
    assert!(persisted(&store.dispatch(Action::Tick).effects).is_some());
}

#[test]
fn test_save_ack_clears_modified_and_status_expires() {
    let (mut store, clock) = new_store();
    store.dispatch(Action::UpdateContent("x".into()));
    store.dispatch(Action::RunCommand(Command::NewTab));
    store.dispatch(Action::UpdateContent("y".into()));

    let result = store.dispatch(Action::RunCommand(Command::Save));
    let ticket = persisted(&result.effects).unwrap().ticket.clone();
    store.dispatch(Action::SaveFinished { ticket, ok: true });

    assert!(!store.state().workspace.has_unsaved_changes());
    assert!(store.state().workspace.tabs().iter().all(|t| !t.is_modified));
    assert_eq!(store.state().autosave.status.get(), Some(&SaveStatus::Saved));

    clock.advance(Duration::from_secs(2));
    assert!(store.dispatch(Action::Tick).state_changed);
    assert_eq!(store.state().autosave.status.get(), None);
}

#[test]
fn test_explicit_save_cancels_pending_autosave() {
    let (mut store, clock) = new_store();
    store.dispatch(Action::UpdateContent("x".into()));
    let ticket = persisted(&store.dispatch(Action::RunCommand(Command::Save)).effects)
        .unwrap()
        .ticket
        .clone();
    store.dispatch(Action::SaveFinished { ticket, ok: true });

    clock.advance(Duration::from_secs(10));
    assert!(persisted(&store.dispatch(Action::Tick).effects).is_none());
}

#[test]
fn test_edit_between_snapshot_and_ack_stays_modified() {
    let (mut store, clock) = new_store();
    store.dispatch(Action::UpdateContent("x".into()));
    let ticket = persisted(&store.dispatch(Action::RunCommand(Command::Save)).effects)
        .unwrap()
        .ticket
        .clone();
    store.dispatch(Action::UpdateContent("xy".into()));
    store.dispatch(Action::SaveFinished { ticket, ok: true });

    assert!(store.state().workspace.active_tab().unwrap().is_modified);
    clock.advance(Duration::from_secs(3));
    assert!(persisted(&store.dispatch(Action::Tick).effects).is_some());
}

#[test]
fn test_failed_save_keeps_modified_and_reports() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::UpdateContent("x".into()));
    let ticket = persisted(&store.dispatch(Action::RunCommand(Command::Save)).effects)
        .unwrap()
        .ticket
        .clone();
    store.dispatch(Action::SaveFinished { ticket, ok: false });

    assert!(store.state().workspace.has_unsaved_changes());
    assert_eq!(store.state().autosave.status.get(), Some(&SaveStatus::Failed));
}

#[test]
fn test_format_success_replaces_content() {
    let (mut store, _clock) = new_store();
    let id = active_id(&store);
    store.dispatch(Action::SetLanguage(LanguageId::Json));
    store.dispatch(Action::UpdateContent("{\"a\":1}".into()));

    let result = store.dispatch(Action::RunCommand(Command::Format));
    let (tab_id, request_id) = format_request(&result.effects);
    assert_eq!(tab_id, id);
    assert!(store.state().format.is_formatting(id));

    store.dispatch(Action::FormatFinished {
        tab_id,
        request_id,
        result: Ok("{\n  \"a\": 1\n}\n".into()),
    });
    assert_eq!(store.state().workspace.tab(id).unwrap().content, "{\n  \"a\": 1\n}\n");
    assert!(!store.state().format.is_formatting(id));
    assert!(store.state().format.notice.get().is_none());
}

#[test]
fn test_format_error_keeps_content_and_expires() {
    let (mut store, clock) = new_store();
    let id = active_id(&store);
    store.dispatch(Action::SetLanguage(LanguageId::Json));
    store.dispatch(Action::UpdateContent("{ a:1 }".into()));
    let (tab_id, request_id) =
        format_request(&store.dispatch(Action::RunCommand(Command::Format)).effects);

    store.dispatch(Action::FormatFinished {
        tab_id,
        request_id,
        result: Err(FormatError::Syntax("key must be a string".into())),
    });
    assert_eq!(store.state().workspace.tab(id).unwrap().content, "{ a:1 }");
    assert!(matches!(
        store.state().format.notice.get(),
        Some(FormatNotice::Failed(_))
    ));

    clock.advance(Duration::from_secs(3));
    store.dispatch(Action::Tick);
    assert!(store.state().format.notice.get().is_none());
}

#[test]
fn test_second_format_while_in_flight_is_rejected() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::SetLanguage(LanguageId::Css));
    store.dispatch(Action::UpdateContent("a{color:red}".into()));
    assert_eq!(
        store.dispatch(Action::RunCommand(Command::Format)).effects.len(),
        1
    );
    let second = store.dispatch(Action::RunCommand(Command::Format));
    assert!(second.effects.is_empty());
    assert!(!second.state_changed);
}

#[test]
fn test_format_result_lands_on_original_tab_after_switch() {
    let (mut store, _clock) = new_store();
    let first = active_id(&store);
    store.dispatch(Action::SetLanguage(LanguageId::Json));
    store.dispatch(Action::UpdateContent("[1,2]".into()));
    let (tab_id, request_id) =
        format_request(&store.dispatch(Action::RunCommand(Command::Format)).effects);

    store.dispatch(Action::RunCommand(Command::NewTab));
    store.dispatch(Action::UpdateContent("other".into()));
    store.dispatch(Action::FormatFinished {
        tab_id,
        request_id,
        result: Ok("[\n  1,\n  2\n]\n".into()),
    });

    assert_eq!(store.state().workspace.tab(first).unwrap().content, "[\n  1,\n  2\n]\n");
    assert_eq!(store.state().workspace.active_tab().unwrap().content, "other");
}

#[test]
fn test_format_result_for_closed_or_edited_tab_is_discarded() {
    let (mut store, _clock) = new_store();
    let id = active_id(&store);
    store.dispatch(Action::SetLanguage(LanguageId::Json));
    store.dispatch(Action::UpdateContent("[1]".into()));
    let (tab_id, request_id) =
        format_request(&store.dispatch(Action::RunCommand(Command::Format)).effects);
    store.dispatch(Action::UpdateContent("[1, 2]".into()));
    store.dispatch(Action::FormatFinished {
        tab_id,
        request_id,
        result: Ok("[\n  1\n]\n".into()),
    });
    assert_eq!(store.state().workspace.tab(id).unwrap().content, "[1, 2]");

    let (tab_id, request_id) =
        format_request(&store.dispatch(Action::RunCommand(Command::Format)).effects);
    store.dispatch(Action::CloseTab(id));
    let result = store.dispatch(Action::FormatFinished {
        tab_id,
        request_id,
        result: Ok("[]".into()),
    });
    assert!(!result.state_changed);
    assert!(store.state().workspace.is_empty());
}

#[test]
fn test_format_unsupported_language_shows_notice() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::SetLanguage(LanguageId::Python));
    store.dispatch(Action::UpdateContent("x = 1".into()));
    let result = store.dispatch(Action::RunCommand(Command::Format));
    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().format.notice.get(),
        Some(&FormatNotice::Unsupported(LanguageId::Python))
    );
}

#[test]
fn test_toggle_comment_uses_selection() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::SetLanguage(LanguageId::Python));
    store.dispatch(Action::UpdateContent("a = 1\nb = 2".into()));
    store.dispatch(Action::SetSelection { start: 0, end: 3 });
    store.dispatch(Action::RunCommand(Command::ToggleComment));

    let tab = store.state().workspace.active_tab().unwrap();
    assert_eq!(tab.content, "# a = 1\nb = 2");
    assert_eq!(store.state().ui.selection, (0, 7));
}

#[test]
fn test_insert_indent_moves_cursor() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::UpdateContent("ab".into()));
    store.dispatch(Action::SetSelection { start: 1, end: 1 });
    store.dispatch(Action::RunCommand(Command::InsertIndent));
    assert_eq!(store.state().workspace.active_tab().unwrap().content, "a  b");
    assert_eq!(store.state().ui.selection, (3, 3));
}

#[test]
fn test_drop_tab_on_folder_and_back_to_root() {
    let (mut store, _clock) = new_store();
    let tab = active_id(&store);
    store.dispatch(Action::RunCommand(Command::NewFolder));
    store.dispatch(Action::CancelRename);
    let folder = store.state().workspace.folders()[0].id;

    store.dispatch(Action::DragStart(DragPayload::Tab(tab)));
    store.dispatch(Action::DragEnter(DropTarget::Folder(folder)));
    assert_eq!(store.state().ui.drag.hover(), Some(DropTarget::Folder(folder)));
    store.dispatch(Action::Drop(DropTarget::Folder(folder)));
    assert_eq!(store.state().workspace.tab(tab).unwrap().folder_id, Some(folder));
    assert!(!store.state().ui.drag.is_dragging());

    store.dispatch(Action::DragStart(DragPayload::Tab(tab)));
    store.dispatch(Action::Drop(DropTarget::Root));
    assert_eq!(store.state().workspace.tab(tab).unwrap().folder_id, None);
}

#[test]
fn test_drag_end_without_drop_clears_hover() {
    let (mut store, _clock) = new_store();
    let a = active_id(&store);
    store.dispatch(Action::RunCommand(Command::NewTab));
    let b = active_id(&store);
    store.dispatch(Action::DragStart(DragPayload::Tab(a)));
    store.dispatch(Action::DragEnter(DropTarget::Tab(b)));
    assert!(store.dispatch(Action::DragEnd).state_changed);
    assert_eq!(store.state().ui.drag.hover(), None);
    assert_eq!(store.state().workspace.tabs()[0].id, a);
}

#[test]
fn test_drop_tab_on_tab_reorders() {
    let (mut store, _clock) = new_store();
    let a = active_id(&store);
    store.dispatch(Action::RunCommand(Command::NewTab));
    let b = active_id(&store);
    store.dispatch(Action::DragStart(DragPayload::Tab(a)));
    store.dispatch(Action::Drop(DropTarget::Tab(b)));
    let order: Vec<TabId> = store.state().workspace.tabs().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![b, a]);
}

#[test]
fn test_context_menu_delete_folder_with_tabs_asks_first() {
    let (mut store, _clock) = new_store();
    let tab = active_id(&store);
    store.dispatch(Action::RunCommand(Command::NewFolder));
    store.dispatch(Action::CommitRename("Docs".into()));
    let folder = store.state().workspace.folders()[0].id;
    store.dispatch(Action::MoveTabToFolder {
        tab,
        folder: Some(folder),
    });

    store.dispatch(Action::ContextMenuOpen {
        target: ContextMenuTarget::Folder(folder),
        x: 1,
        y: 1,
    });
    store.dispatch(Action::ContextMenuSetSelected { index: 2 });
    assert_eq!(
        store.state().ui.context_menu.items[2],
        ContextMenuItem::DeleteFolder
    );
    store.dispatch(Action::ContextMenuConfirm);

    let prompt = store.state().ui.delete_folder_prompt.clone().unwrap();
    assert_eq!(prompt.name, "Docs");
    assert_eq!(prompt.file_count, 1);
    assert!(!store.state().ui.context_menu.visible);

    store.dispatch(Action::ConfirmDeleteFolder);
    assert!(store.state().workspace.folders().is_empty());
    assert_eq!(store.state().workspace.tab(tab).unwrap().folder_id, None);
}

#[test]
fn test_context_menu_delete_empty_folder_is_immediate() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::RunCommand(Command::NewFolder));
    store.dispatch(Action::CancelRename);
    let folder = store.state().workspace.folders()[0].id;
    store.dispatch(Action::ContextMenuOpen {
        target: ContextMenuTarget::Folder(folder),
        x: 0,
        y: 0,
    });
    store.dispatch(Action::ContextMenuSetSelected { index: 2 });
    store.dispatch(Action::ContextMenuConfirm);
    assert!(store.state().workspace.folders().is_empty());
    assert!(store.state().ui.delete_folder_prompt.is_none());
}

#[test]
fn test_context_menu_closes_when_target_tab_goes_away() {
    let (mut store, _clock) = new_store();
    let id = active_id(&store);
    store.dispatch(Action::ContextMenuOpen {
        target: ContextMenuTarget::Tab(id),
        x: 0,
        y: 0,
    });
    store.dispatch(Action::RunCommand(Command::CloseTab));
    assert!(!store.state().ui.context_menu.visible);
}

#[test]
fn test_rename_flow_trims_and_ignores_blank() {
    let (mut store, _clock) = new_store();
    let id = active_id(&store);
    store.dispatch(Action::StartRename(RenameTarget::Tab(id)));
    assert_eq!(store.state().ui.rename.as_ref().unwrap().draft, "Untitled-1");
    store.dispatch(Action::CommitRename("  notes.md ".into()));
    assert_eq!(store.state().workspace.tab(id).unwrap().name, "notes.md");
    assert!(store.state().ui.rename.is_none());

    store.dispatch(Action::StartRename(RenameTarget::Tab(id)));
    store.dispatch(Action::CommitRename("   ".into()));
    assert_eq!(store.state().workspace.tab(id).unwrap().name, "notes.md");
}

#[test]
fn test_toggle_theme_applies_and_persists() {
    let (mut store, _clock) = new_store();
    let result = store.dispatch(Action::RunCommand(Command::ToggleTheme));
    assert_eq!(store.state().ui.theme, Theme::Dark);
    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::ApplyTheme(Theme::Dark))));
    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::PersistTheme(Theme::Dark))));
}

#[test]
fn test_set_language_does_not_mark_modified_but_autosaves() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::ToggleLanguageMenu);
    assert!(store.state().ui.language_menu_open);
    store.dispatch(Action::SetLanguage(LanguageId::Rust));
    let tab = store.state().workspace.active_tab().unwrap();
    assert_eq!(tab.language, LanguageId::Rust);
    assert!(!tab.is_modified);
    assert!(!store.state().ui.language_menu_open);
    assert!(store.state().autosave.timer.is_armed());
}

#[test]
fn test_opened_files_and_directory_become_tabs() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::FilesOpened(vec![OpenedFile {
        name: "main.rs".into(),
        content: "fn main() {}".into(),
        handle: FileHandle::new("/tmp/main.rs"),
    }]));
    let tab = store.state().workspace.active_tab().unwrap();
    assert_eq!(tab.language, LanguageId::Rust);
    assert!(tab.origin.is_some());

    store.dispatch(Action::DirectoryOpened {
        name: "site".into(),
        files: vec![OpenedFile {
            name: "index.html".into(),
            content: "<p></p>".into(),
            handle: FileHandle::new("/tmp/site/index.html"),
        }],
    });
    let folder = store.state().workspace.folders().last().unwrap().clone();
    assert_eq!(folder.name, "site");
    assert_eq!(store.state().workspace.folder_tab_count(folder.id), 1);
}

#[test]
fn test_save_writes_back_or_downloads_origin_tabs() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::FilesOpened(vec![OpenedFile {
        name: "a.txt".into(),
        content: "a".into(),
        handle: FileHandle::new("/tmp/a.txt"),
    }]));
    let effects = store.dispatch(Action::RunCommand(Command::Save)).effects;
    assert!(effects.iter().any(|e| matches!(e, Effect::Download(_))));

    store.set_write_back(true);
    let effects = store.dispatch(Action::RunCommand(Command::Save)).effects;
    assert!(effects.iter().any(|e| matches!(e, Effect::WriteFile { .. })));
}

#[test]
fn test_close_last_tab_then_new_tab() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::RunCommand(Command::CloseTab));
    assert!(store.state().workspace.is_empty());
    assert!(store.active_projection().is_none());
    store.dispatch(Action::RunCommand(Command::NewTab));
    assert_eq!(store.state().workspace.tabs().len(), 1);
    assert!(store.state().workspace.active_tab_id().is_some());
}

#[test]
fn test_active_projection_follows_language() {
    let (mut store, _clock) = new_store();
    store.dispatch(Action::UpdateContent("fn main() {}".into()));
    assert!(store.active_projection().unwrap().is_plain());
    store.dispatch(Action::SetLanguage(LanguageId::Rust));
    assert!(!store.active_projection().unwrap().is_plain());
}

#[test]
fn test_escape_closes_transient_ui() {
    let (mut store, _clock) = new_store();
    let id = active_id(&store);
    store.dispatch(Action::ContextMenuOpen {
        target: ContextMenuTarget::Tab(id),
        x: 0,
        y: 0,
    });
    store.dispatch(Action::StartRename(RenameTarget::Tab(id)));
    assert!(store.dispatch(Action::RunCommand(Command::Escape)).state_changed);
    assert!(!store.state().ui.context_menu.visible);
    assert!(store.state().ui.rename.is_none());
}

#[test]
fn test_flush_saves_only_when_dirty() {
    let (mut store, _clock) = new_store();
    assert!(persisted(&store.dispatch(Action::Flush).effects).is_none());

    store.dispatch(Action::UpdateContent("draft".into()));
    let result = store.dispatch(Action::Flush);
    let snapshot = persisted(&result.effects).expect("flush snapshot");
    assert!(snapshot.tabs_json.contains("draft"));
    assert!(!store.state().autosave.timer.is_armed());
}
