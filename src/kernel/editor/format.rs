//! Per-tab formatting state machine: `idle -> formatting -> idle`.
//!
//! The formatter itself runs outside the kernel. A request remembers the tab
//! and the tab's edit version; a result only lands if both still match.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::kernel::language::LanguageId;
use crate::kernel::scheduler::Transient;
use crate::kernel::workspace::Tab;
use crate::models::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRequest {
    pub request_id: u64,
    pub edit_version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatNotice {
    Unsupported(LanguageId),
    Failed(String),
}

impl fmt::Display for FormatNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(lang) => {
                write!(f, "Formatting not supported for {}", lang.display_name())
            }
            Self::Failed(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStart {
    /// Empty content or plain text: nothing to do.
    Skipped,
    Unsupported(LanguageId),
    /// A request for this tab is still outstanding.
    Busy,
    Started(FormatRequest),
}

#[derive(Debug, Default)]
pub struct FormatState {
    in_flight: FxHashMap<TabId, FormatRequest>,
    next_request: u64,
    pub notice: Transient<FormatNotice>,
}

impl FormatState {
    pub fn is_formatting(&self, tab_id: TabId) -> bool {
        self.in_flight.contains_key(&tab_id)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn begin(&mut self, tab: &Tab) -> FormatStart {
        if tab.content.is_empty() || tab.language == LanguageId::PlainText {
            return FormatStart::Skipped;
        }
        if tab.language.formatter().is_none() {
            return FormatStart::Unsupported(tab.language);
        }
        if self.is_formatting(tab.id) {
            return FormatStart::Busy;
        }

        self.next_request += 1;
        let request = FormatRequest {
            request_id: self.next_request,
            edit_version: tab.edit_version,
        };
        self.in_flight.insert(tab.id, request);
        FormatStart::Started(request)
    }

    /// Closes the request if `request_id` is the one outstanding for the tab.
    pub fn finish(&mut self, tab_id: TabId, request_id: u64) -> Option<FormatRequest> {
        match self.in_flight.get(&tab_id) {
            Some(request) if request.request_id == request_id => self.in_flight.remove(&tab_id),
            _ => None,
        }
    }

    /// Drops the bookkeeping for a tab that no longer exists.
    pub fn forget(&mut self, tab_id: TabId) -> bool {
        self.in_flight.remove(&tab_id).is_some()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(TabId) -> bool) {
        self.in_flight.retain(|id, _| keep(*id));
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/format.rs"]
mod tests;
