use super::*;
use tempfile::tempdir;

#[test]
fn downloads_and_prints_land_in_the_output_dir() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    let mut env = DirectoryEnvironment::new(&out);

    env.deliver_download("notes.md", b"# hi").unwrap();
    env.print("notes.md", "<pre>x</pre>").unwrap();

    assert_eq!(fs::read(out.join("notes.md")).unwrap(), b"# hi");
    assert_eq!(
        fs::read_to_string(out.join("notes.md.print.html")).unwrap(),
        "<pre>x</pre>"
    );
}

#[test]
fn theme_is_recorded() {
    let mut env = DirectoryEnvironment::new("unused");
    assert_eq!(env.theme(), None);
    env.apply_theme(Theme::Dark);
    assert_eq!(env.theme(), Some(Theme::Dark));
}

#[test]
fn file_names_cannot_escape_the_output_dir() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "_.._etc_passwd");
    assert_eq!(sanitize_file_name("a:b.txt"), "a_b.txt");
    assert_eq!(sanitize_file_name("   "), "untitled");
    assert_eq!(sanitize_file_name("Untitled 1.txt"), "Untitled 1.txt");
}
