use std::time::Duration;

use super::settings::EditorSettings;

/// Runtime knobs for the editing and persistence pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub indent_unit: String,
    pub autosave_delay: Duration,
    pub format_error_ttl: Duration,
    pub save_status_ttl: Duration,
    pub auto_name_max_len: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_unit: "  ".to_string(),
            autosave_delay: Duration::from_secs(3),
            format_error_ttl: Duration::from_secs(3),
            save_status_ttl: Duration::from_secs(2),
            auto_name_max_len: 30,
        }
    }
}

impl EditorConfig {
    pub fn from_settings(settings: &EditorSettings) -> Self {
        let defaults = Self::default();
        Self {
            indent_unit: " ".repeat(settings.indent_width.clamp(1, 8) as usize),
            autosave_delay: settings
                .autosave_delay_ms
                .map_or(defaults.autosave_delay, Duration::from_millis),
            format_error_ttl: defaults.format_error_ttl,
            save_status_ttl: defaults.save_status_ttl,
            auto_name_max_len: settings.auto_name_max_len.unwrap_or(defaults.auto_name_max_len),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
