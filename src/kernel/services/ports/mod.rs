//! Service ports: traits + data contracts.

pub mod config;
pub mod environment;
pub mod file;
pub mod formatter;
pub mod settings;
pub mod store;

pub use config::EditorConfig;
pub use environment::Environment;
pub use file::{
    BridgeError, DirectoryEntry, EntryKind, FileBridge, OpenedDirectory, OpenedFile,
};
pub use formatter::{CodeFormatter, FormatError};
pub use settings::{EditorSettings, KeybindingRule, Settings};
pub use store::{KeyValueStore, StoreError};
