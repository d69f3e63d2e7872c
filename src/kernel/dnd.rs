//! Drag and drop: one in-flight drag, typed by what is being dragged.

use crate::models::{FolderId, TabId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPayload {
    Tab(TabId),
    Folder(FolderId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    Tab(TabId),
    Folder(FolderId),
    /// The sidebar area outside any folder.
    Root,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropIntent {
    ReorderTab { dragged: TabId, target: TabId },
    MoveTabToFolder { tab: TabId, folder: FolderId },
    MoveTabToRoot { tab: TabId },
    ReorderFolder { dragged: FolderId, target: FolderId },
}

pub fn drop_intent(payload: DragPayload, target: DropTarget) -> Option<DropIntent> {
    match (payload, target) {
        (DragPayload::Tab(dragged), DropTarget::Tab(target)) if dragged != target => {
            Some(DropIntent::ReorderTab { dragged, target })
        }
        (DragPayload::Tab(tab), DropTarget::Folder(folder)) => {
            Some(DropIntent::MoveTabToFolder { tab, folder })
        }
        (DragPayload::Tab(tab), DropTarget::Root) => Some(DropIntent::MoveTabToRoot { tab }),
        (DragPayload::Folder(dragged), DropTarget::Folder(target)) if dragged != target => {
            Some(DropIntent::ReorderFolder { dragged, target })
        }
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    payload: Option<DragPayload>,
    hover: Option<DropTarget>,
}

impl DragState {
    pub fn payload(&self) -> Option<DragPayload> {
        self.payload
    }

    pub fn hover(&self) -> Option<DropTarget> {
        self.hover
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// Starts a drag, replacing whatever drag was in flight.
    pub fn start(&mut self, payload: DragPayload) -> bool {
        let next = Self {
            payload: Some(payload),
            hover: None,
        };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// Highlights `target` if the current payload could drop there.
    pub fn enter(&mut self, target: DropTarget) -> bool {
        let hover = self
            .payload
            .and_then(|payload| drop_intent(payload, target))
            .map(|_| target);
        if self.hover == hover {
            return false;
        }
        self.hover = hover;
        true
    }

    pub fn leave(&mut self, target: DropTarget) -> bool {
        if self.hover != Some(target) {
            return false;
        }
        self.hover = None;
        true
    }

    /// Ends the drag on `target`, returning what the drop means.
    pub fn drop_on(&mut self, target: DropTarget) -> Option<DropIntent> {
        let payload = self.payload?;
        self.end();
        drop_intent(payload, target)
    }

    /// Clears the drag and its hover, with or without a drop.
    pub fn end(&mut self) -> bool {
        let changed = self.payload.is_some() || self.hover.is_some();
        self.payload = None;
        self.hover = None;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dnd.rs"]
mod tests;
