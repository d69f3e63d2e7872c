//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod dirs;
pub mod environment;
pub mod file;
pub mod formatter;
pub mod keybinding;
pub mod runtime;
pub mod settings;
pub mod store;

pub use dirs::{
    ensure_log_dir, ensure_store_dir, get_app_data_dir, get_log_dir, get_store_dir,
};
pub use environment::DirectoryEnvironment;
pub use file::{LocalFileBridge, ReadOnlyFileBridge};
pub use formatter::BuiltinFormatter;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, parse_keybinding};
pub use store::{FileKeyValueStore, MemoryKeyValueStore};
