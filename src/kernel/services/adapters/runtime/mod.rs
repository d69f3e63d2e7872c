//! Async runtime adapter: runs slow effects off the dispatch thread and
//! sends results back as messages.

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
