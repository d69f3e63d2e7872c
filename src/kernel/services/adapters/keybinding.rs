//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    /// Bound while the notepad is mounted.
    Global,
    /// Bound only while the text area has focus.
    Editor,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Some(Self::Global),
            "editor" | "textarea" => Some(Self::Editor),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
        }
    }

    /// Defaults with the user's overrides applied on top.
    pub fn from_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        service.apply_rules(rules);
        service
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
        }
        .copied()
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Editor => &self.editor,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies settings rules; rules that do not parse are skipped with a warning.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unknown key");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(value) => match KeybindingContext::parse(value) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %value, "ignoring keybinding with unknown context");
                        continue;
                    }
                },
            };
            // An empty command name removes the default binding.
            if rule.command.trim().is_empty() {
                self.unbind(context, &key);
                applied += 1;
                continue;
            }
            let Some(command) = Command::from_name(rule.command.trim()) else {
                tracing::warn!(command = %rule.command, "ignoring keybinding with unknown command");
                continue;
            };
            self.bind(context, key, command);
            applied += 1;
        }
        applied
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);

    bindings.insert(Key::ctrl(KeyCode::Char('j')), Command::NewTab);
    bindings.insert(Key::ctrl(KeyCode::Char('k')), Command::CloseTab);
    bindings.insert(Key::ctrl(KeyCode::Tab), Command::NextTab);
    bindings.insert(Key::ctrl_shift(KeyCode::Tab), Command::PrevTab);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('n')), Command::NewFolder);

    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('s')), Command::Download);
    bindings.insert(Key::ctrl(KeyCode::Char('p')), Command::Print);

    bindings.insert(Key::ctrl(KeyCode::Char('l')), Command::ToggleSidebar);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('l')), Command::ToggleTheme);
    bindings.insert(Key::shift_alt(KeyCode::Char('f')), Command::Format);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertIndent);
    bindings.insert(Key::ctrl(KeyCode::Char('/')), Command::ToggleComment);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
