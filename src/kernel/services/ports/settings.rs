use serde::{Deserialize, Serialize};

use crate::models::Theme;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub editor: EditorSettings,
    /// Used until a theme has been persisted in the workspace store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_indent_width")]
    pub indent_width: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autosave_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_name_max_len: Option<usize>,
}

fn default_indent_width() -> u8 {
    2
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            autosave_delay_ms: None,
            auto_name_max_len: None,
        }
    }
}
