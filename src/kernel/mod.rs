//! Headless application core (state/action/effect).

pub mod action;
pub mod context_menu;
pub mod dnd;
pub mod editor;
pub mod effect;
pub mod export;
pub mod language;
pub mod persistence;
pub mod scheduler;
pub mod services;
pub mod state;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use context_menu::{ContextMenuItem, ContextMenuState, ContextMenuTarget};
pub use dnd::{DragPayload, DragState, DropIntent, DropTarget};
pub use effect::Effect;
pub use language::LanguageId;
pub use persistence::{SaveStatus, SaveTicket, WorkspaceSnapshot};
pub use scheduler::{Clock, ManualClock, SystemClock};
pub use state::{AppState, DeleteFolderPrompt, RenameState, RenameTarget, UiState};
pub use store::{DispatchResult, Store};
pub use workspace::{Folder, Tab, Workspace};
