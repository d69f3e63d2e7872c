use crate::kernel::services::ports::FormatError;
use crate::kernel::Action;
use crate::models::TabId;

#[derive(Debug)]
pub enum AppMessage {
    FormatFinished {
        tab_id: TabId,
        request_id: u64,
        result: Result<String, FormatError>,
    },
    FileWritten {
        tab_id: TabId,
        ok: bool,
    },
}

impl From<AppMessage> for Action {
    fn from(message: AppMessage) -> Self {
        match message {
            AppMessage::FormatFinished {
                tab_id,
                request_id,
                result,
            } => Action::FormatFinished {
                tab_id,
                request_id,
                result,
            },
            AppMessage::FileWritten { tab_id, ok } => Action::FileWritten { tab_id, ok },
        }
    }
}
