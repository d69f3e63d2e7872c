//! Time-driven and async-completion paths: autosave, save acks, format results.

use crate::kernel::editor::FormatNotice;
use crate::kernel::persistence::{self, SaveStatus, SaveTicket};
use crate::kernel::services::ports::FormatError;
use crate::kernel::Effect;
use crate::models::TabId;

use super::DispatchResult;

impl super::Store {
    pub(super) fn tick(&mut self) -> DispatchResult {
        let now = self.clock.now();
        let mut state_changed = self.state.autosave.status.poll(now);
        state_changed |= self.state.format.notice.poll(now);

        let mut effects = Vec::new();
        if self.state.autosave.timer.poll(now) {
            // The timer only says "something changed a while ago"; the
            // workspace may have been saved explicitly since then.
            if self.state.workspace.has_unsaved_changes() {
                tracing::debug!("autosave fired");
                effects = self.save_now();
                state_changed = true;
            }
        }

        DispatchResult {
            effects,
            state_changed,
        }
    }

    pub(super) fn flush(&mut self) -> DispatchResult {
        if !self.state.workspace.has_unsaved_changes() {
            return DispatchResult::changed(false);
        }
        DispatchResult {
            effects: self.save_now(),
            state_changed: true,
        }
    }

    /// Snapshots the workspace for the host to write, bypassing the debounce.
    pub(super) fn save_now(&mut self) -> Vec<Effect> {
        self.state.autosave.timer.cancel();
        match persistence::snapshot(&self.state.workspace) {
            Ok(snapshot) => {
                self.state.autosave.status.show(SaveStatus::Saving);
                self.state.autosave.pending = Some(snapshot.ticket.clone());
                vec![Effect::PersistWorkspace(snapshot)]
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize workspace");
                self.state.autosave.status.show(SaveStatus::Failed);
                Vec::new()
            }
        }
    }

    pub(super) fn save_finished(&mut self, ticket: SaveTicket, ok: bool) -> DispatchResult {
        if self.state.autosave.pending.as_ref() == Some(&ticket) {
            self.state.autosave.pending = None;
        }
        if ok {
            self.state
                .workspace
                .mark_saved(&ticket.tab_versions, ticket.layout_version);
            let ttl = self.state.config.save_status_ttl;
            self.state
                .autosave
                .status
                .show_for(SaveStatus::Saved, self.clock.now(), ttl);
        } else {
            self.state.autosave.status.show(SaveStatus::Failed);
        }
        DispatchResult::changed(true)
    }

    pub(super) fn format_finished(
        &mut self,
        tab_id: TabId,
        request_id: u64,
        result: Result<String, FormatError>,
    ) -> DispatchResult {
        let Some(request) = self.state.format.finish(tab_id, request_id) else {
            tracing::debug!(tab_id = tab_id.raw(), request_id, "dropping stale format result");
            return DispatchResult::changed(false);
        };

        match result {
            Ok(text) => {
                let current = self.state.workspace.tab(tab_id).map(|t| t.edit_version);
                if current != Some(request.edit_version) {
                    tracing::debug!(tab_id = tab_id.raw(), "tab edited during format, result discarded");
                    return DispatchResult::changed(true);
                }
                self.state.workspace.replace_tab_content(tab_id, text);
                self.state.format.notice.clear();
            }
            Err(e) => {
                tracing::warn!(tab_id = tab_id.raw(), error = %e, "format failed");
                let notice = match e {
                    FormatError::Unsupported(language) => FormatNotice::Unsupported(language),
                    FormatError::Syntax(message) => FormatNotice::Failed(message),
                };
                let ttl = self.state.config.format_error_ttl;
                self.state
                    .format
                    .notice
                    .show_for(notice, self.clock.now(), ttl);
            }
        }
        DispatchResult::changed(true)
    }

    pub(super) fn file_written(&mut self, tab_id: TabId, ok: bool) -> DispatchResult {
        if ok {
            tracing::info!(tab_id = tab_id.raw(), "written back to origin file");
            return DispatchResult::changed(false);
        }
        self.state.autosave.status.show(SaveStatus::Failed);
        DispatchResult::changed(true)
    }
}
