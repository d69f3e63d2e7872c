//! 应用层：把 kernel 的 Effect 交给具体的服务执行

mod workbench;

pub use workbench::{Services, Workbench};
