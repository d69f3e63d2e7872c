//! Sidebar context menu: at most one open, scoped to a tab or a folder.

use crate::models::{FolderId, TabId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuTarget {
    Tab(TabId),
    Folder(FolderId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuItem {
    RenameTab,
    DownloadTab,
    DeleteTab,
    RenameFolder,
    DownloadFolder,
    DeleteFolder,
}

impl ContextMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::RenameTab | Self::RenameFolder => "Rename",
            Self::DownloadTab => "Download",
            Self::DownloadFolder => "Download as ZIP",
            Self::DeleteTab | Self::DeleteFolder => "Delete",
        }
    }

    pub fn for_target(target: ContextMenuTarget) -> Vec<Self> {
        match target {
            ContextMenuTarget::Tab(_) => vec![Self::RenameTab, Self::DownloadTab, Self::DeleteTab],
            ContextMenuTarget::Folder(_) => {
                vec![Self::RenameFolder, Self::DownloadFolder, Self::DeleteFolder]
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextMenuState {
    pub visible: bool,
    pub anchor: (u16, u16),
    pub selected: usize,
    pub items: Vec<ContextMenuItem>,
    pub target: Option<ContextMenuTarget>,
}

impl ContextMenuState {
    /// Opens a menu for `target`, replacing any menu already open.
    pub fn open(&mut self, target: ContextMenuTarget, anchor: (u16, u16)) -> bool {
        let next = Self {
            visible: true,
            anchor,
            selected: 0,
            items: ContextMenuItem::for_target(target),
            target: Some(target),
        };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.visible && self.target.is_none() {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if !self.visible || self.items.is_empty() || delta == 0 {
            return false;
        }
        let len = self.items.len() as isize;
        let next = (self.selected as isize + delta).rem_euclid(len) as usize;
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    pub fn set_selected(&mut self, index: usize) -> bool {
        if !self.visible || index >= self.items.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    /// Closes the menu and returns the chosen item with its target.
    pub fn confirm(&mut self) -> Option<(ContextMenuItem, ContextMenuTarget)> {
        if !self.visible {
            return None;
        }
        let chosen = self.items.get(self.selected).copied().zip(self.target);
        self.close();
        chosen
    }

    /// Closes the menu if it points at a tab or folder that no longer exists.
    pub fn retain(&mut self, exists: impl Fn(ContextMenuTarget) -> bool) -> bool {
        match self.target {
            Some(target) if !exists(target) => self.close(),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/context_menu.rs"]
mod tests;
