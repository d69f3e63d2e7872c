use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use notepad::app::{Services, Workbench};
use notepad::core::Command;
use notepad::kernel::services::adapters::{
    ensure_settings_file, ensure_store_dir, load_settings, BuiltinFormatter,
    DirectoryEnvironment, FileKeyValueStore, LocalFileBridge,
};
use notepad::kernel::services::ports::StoreError;
use notepad::kernel::{Action, SystemClock};
use notepad::models::{FolderId, TabId};

mod logging;

const FORMAT_TIMEOUT: Duration = Duration::from_secs(10);

const USAGE: &str = "usage:
  notepad list
  notepad open <path>...
  notepad export <tab-id|folder-N> <out-dir>
  notepad format <tab-id>";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn main() -> ExitCode {
    let log = logging::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("notepad: {e}");
            match (&log, &e) {
                (_, CliError::Usage(_)) | (None, _) => {}
                (Some(log), _) => eprintln!("notepad: details in {}", log.dir().display()),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };
    match command.as_str() {
        "list" => {
            let workbench = open_workbench(Path::new("."))?;
            list(&workbench);
            Ok(())
        }
        "open" => {
            if rest.is_empty() {
                return Err(CliError::Usage("open needs at least one path".to_string()));
            }
            let mut workbench = open_workbench(Path::new("."))?;
            open(&mut workbench, rest);
            workbench.flush();
            list(&workbench);
            Ok(())
        }
        "export" => {
            let [id, out_dir] = rest else {
                return Err(CliError::Usage("export needs an id and an output directory".to_string()));
            };
            let mut workbench = open_workbench(Path::new(out_dir))?;
            export(&mut workbench, id)
        }
        "format" => {
            let [id] = rest else {
                return Err(CliError::Usage("format needs a tab id".to_string()));
            };
            let mut workbench = open_workbench(Path::new("."))?;
            format(&mut workbench, id)?;
            workbench.flush();
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn open_workbench(out_dir: &Path) -> Result<Workbench, CliError> {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "could not create settings file");
    }
    let settings = load_settings();
    let store = FileKeyValueStore::open(ensure_store_dir()?)?;
    let services = Services {
        store: Box::new(store),
        files: Arc::new(LocalFileBridge::new()),
        environment: Box::new(DirectoryEnvironment::new(out_dir)),
        formatter: Arc::new(BuiltinFormatter::new()),
        clock: Arc::new(SystemClock),
    };
    Ok(Workbench::new(services, &settings)?)
}

fn list(workbench: &Workbench) {
    let workspace = &workbench.state().workspace;
    let print_tab = |indent: &str, tab: &notepad::kernel::Tab| {
        let stats = tab.stats();
        println!(
            "{indent}{:>4}  {}{}  [{}]  {} lines, {} words",
            tab.id.raw(),
            tab.name,
            if tab.is_modified { " *" } else { "" },
            tab.language.display_name(),
            stats.lines,
            stats.words,
        );
    };
    for tab in workspace.tabs_in(None) {
        print_tab("", tab);
    }
    for folder in workspace.folders() {
        println!("folder-{}  {}/", folder.id.raw(), folder.name);
        for tab in workspace.tabs_in(Some(folder.id)) {
            print_tab("  ", tab);
        }
    }
}

fn open(workbench: &mut Workbench, paths: &[String]) {
    let (dirs, files): (Vec<PathBuf>, Vec<PathBuf>) =
        paths.iter().map(PathBuf::from).partition(|p| p.is_dir());
    if !files.is_empty() {
        workbench.dispatch(Action::OpenFiles(files));
    }
    for dir in dirs {
        workbench.dispatch(Action::OpenDirectory(dir));
    }
}

enum ExportTarget {
    Tab(TabId),
    Folder(FolderId),
}

/// `folder-N` names a folder; a bare number names a tab, or a folder when no
/// tab has that id.
fn resolve_target(workbench: &Workbench, id: &str) -> Result<ExportTarget, CliError> {
    let workspace = &workbench.state().workspace;
    let not_found = || CliError::NotFound(format!("no tab or folder `{id}`"));
    if let Some(raw) = id.strip_prefix("folder-") {
        let folder = FolderId::new(raw.parse().map_err(|_| not_found())?);
        return workspace
            .folder(folder)
            .map(|_| ExportTarget::Folder(folder))
            .ok_or_else(not_found);
    }
    let raw: u64 = id
        .strip_prefix("tab-")
        .unwrap_or(id)
        .parse()
        .map_err(|_| not_found())?;
    if workspace.tab(TabId::new(raw)).is_some() {
        Ok(ExportTarget::Tab(TabId::new(raw)))
    } else if workspace.folder(FolderId::new(raw)).is_some() {
        Ok(ExportTarget::Folder(FolderId::new(raw)))
    } else {
        Err(not_found())
    }
}

fn export(workbench: &mut Workbench, id: &str) -> Result<(), CliError> {
    match resolve_target(workbench, id)? {
        ExportTarget::Tab(tab) => {
            workbench.dispatch(Action::ActivateTab(tab));
            workbench.dispatch(Action::RunCommand(Command::Download));
        }
        ExportTarget::Folder(folder) => {
            workbench.dispatch(Action::ExportFolder(folder));
        }
    }
    Ok(())
}

fn format(workbench: &mut Workbench, id: &str) -> Result<(), CliError> {
    let ExportTarget::Tab(tab) = resolve_target(workbench, id)? else {
        return Err(CliError::NotFound(format!("`{id}` is not a tab")));
    };
    workbench.dispatch(Action::ActivateTab(tab));
    workbench.dispatch(Action::RunCommand(Command::Format));

    while workbench.state().format.is_formatting(tab) {
        if !workbench.wait_for_message(FORMAT_TIMEOUT) {
            return Err(CliError::Failed("formatter did not answer in time".to_string()));
        }
    }
    if let Some(notice) = workbench.state().format.notice.get() {
        return Err(CliError::Failed(notice.to_string()));
    }
    Ok(())
}
