use super::Workbench;
use crate::kernel::services::adapters::AppMessage;
use crate::kernel::Action;
use std::sync::mpsc;
use std::time::Duration;

impl Workbench {
    /// 由主循环定时调用：先收取异步结果，再推进防抖与提示计时
    pub fn tick(&mut self) -> bool {
        let mut changed = self.poll_messages();
        changed |= self.dispatch(Action::Tick);
        changed
    }

    pub fn poll_messages(&mut self) -> bool {
        let mut changed = false;
        let mut drained = 0usize;
        while drained < super::MAX_MESSAGE_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(msg) => {
                    drained += 1;
                    changed |= self.handle_message(msg);
                }
                Err(mpsc::TryRecvError::Empty) | Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Blocks for at most `timeout` for the next async result.
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.handle_message(msg);
                true
            }
            Err(_) => false,
        }
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        self.dispatch(Action::from(msg))
    }

    /// Persists anything not yet saved; used before the host exits.
    pub fn flush(&mut self) -> bool {
        self.poll_messages();
        self.dispatch(Action::Flush)
    }
}
