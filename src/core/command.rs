//! 命令系统：语义命令定义
//!
//! Command 只描述意图；按键到命令的映射由 KeybindingService 负责。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
    NewFolder,
    Save,
    Download,
    Print,
    ToggleSidebar,
    ToggleTheme,
    ToggleComment,
    InsertIndent,
    Format,
    Escape,
}

impl Command {
    pub const ALL: [Command; 14] = [
        Command::NewTab,
        Command::CloseTab,
        Command::NextTab,
        Command::PrevTab,
        Command::NewFolder,
        Command::Save,
        Command::Download,
        Command::Print,
        Command::ToggleSidebar,
        Command::ToggleTheme,
        Command::ToggleComment,
        Command::InsertIndent,
        Command::Format,
        Command::Escape,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::NewTab => "newTab",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::NewFolder => "newFolder",
            Command::Save => "save",
            Command::Download => "download",
            Command::Print => "print",
            Command::ToggleSidebar => "toggleSidebar",
            Command::ToggleTheme => "toggleTheme",
            Command::ToggleComment => "toggleComment",
            Command::InsertIndent => "insertIndent",
            Command::Format => "format",
            Command::Escape => "escape",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Commands that read or rewrite the active tab's text selection.
    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::ToggleComment | Command::InsertIndent | Command::Format
        )
    }
}
