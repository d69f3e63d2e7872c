use super::*;
use crate::kernel::language::LanguageId;
use std::io::Read;

fn entries(bytes: &[u8]) -> Vec<(String, String)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut body = String::new();
            file.read_to_string(&mut body).unwrap();
            (file.name().to_string(), body)
        })
        .collect()
}

#[test]
fn tab_blob_uses_language_extension_when_name_has_none() {
    let mut ws = Workspace::new();
    let id = ws.open_document("script".to_string(), "print(1)".to_string(), LanguageId::Python, None);
    let blob = tab_blob(ws.tab(id).unwrap());
    assert_eq!(blob.file_name, "script.py");
    assert_eq!(blob.bytes, b"print(1)");

    let named = ws.open_document("notes.txt".to_string(), "x".to_string(), LanguageId::Markdown, None);
    assert_eq!(tab_blob(ws.tab(named).unwrap()).file_name, "notes.txt");
}

#[test]
fn folder_zip_has_one_entry_per_tab_with_unique_names() {
    let mut ws = Workspace::new();
    let folder = ws.create_folder_named("Docs");
    for content in ["one", "two"] {
        let id = ws.open_document("readme".to_string(), content.to_string(), LanguageId::Markdown, None);
        ws.move_tab_to_folder(id, Some(folder));
    }
    ws.open_document("outside".to_string(), "nope".to_string(), LanguageId::PlainText, None);

    let blob = folder_zip(&ws, folder).unwrap().unwrap();
    assert_eq!(blob.file_name, "Docs.zip");
    assert_eq!(
        entries(&blob.bytes),
        vec![
            ("readme.md".to_string(), "one".to_string()),
            ("readme (2).md".to_string(), "two".to_string()),
        ]
    );
}

#[test]
fn empty_folder_zips_to_empty_archive() {
    let mut ws = Workspace::new();
    let folder = ws.create_folder();
    let blob = folder_zip(&ws, folder).unwrap().unwrap();
    assert!(entries(&blob.bytes).is_empty());
}

#[test]
fn unknown_folder_has_nothing_to_export() {
    let ws = Workspace::new();
    assert!(folder_zip(&ws, FolderId::new(42)).is_none());
}

#[test]
fn unique_names_without_extension() {
    let mut taken = HashSet::new();
    assert_eq!(unique_entry_name("Makefile", &mut taken), "Makefile");
    assert_eq!(unique_entry_name("Makefile", &mut taken), "Makefile (2)");
    assert_eq!(unique_entry_name("Makefile", &mut taken), "Makefile (3)");
}

#[test]
fn print_document_escapes_content() {
    let mut ws = Workspace::new();
    let id = ws.open_document("a<b>".to_string(), "<script>&</script>".to_string(), LanguageId::Html, None);
    let html = print_document(ws.tab(id).unwrap());
    assert!(html.contains("<title>a&lt;b&gt;</title>"));
    assert!(html.contains("<pre>&lt;script&gt;&amp;&lt;/script&gt;</pre>"));
}
