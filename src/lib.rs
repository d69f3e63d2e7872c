//! notepad - 多标签记事本的工作区核心
//!
//! 模块结构：
//! - core: 命令与按键
//! - models: 基础数据（ID、文件句柄、主题、统计）
//! - kernel: 工作区、编辑、高亮、持久化、拖放与菜单（纯状态机）
//! - app: 应用层（Workbench，执行副作用）

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
