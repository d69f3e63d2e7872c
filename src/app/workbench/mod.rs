//! 工作台：持有 Store 与各项服务，分发 Action 并执行 Effect

use crate::core::event::Key;
use crate::kernel::editor::Projection;
use crate::kernel::persistence;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, KeybindingContext, KeybindingService};
use crate::kernel::services::ports::{
    CodeFormatter, EditorConfig, Environment, FileBridge, KeyValueStore, Settings,
};
use crate::kernel::{Action, AppState, Clock, Store};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

mod bridge;
mod tick;

const MAX_MESSAGE_DRAIN_PER_TICK: usize = 256;

/// Everything the workbench talks to outside the kernel.
pub struct Services {
    pub store: Box<dyn KeyValueStore>,
    pub files: Arc<dyn FileBridge>,
    pub environment: Box<dyn Environment>,
    pub formatter: Arc<dyn CodeFormatter>,
    pub clock: Arc<dyn Clock>,
}

pub struct Workbench {
    store: Store,
    kv: Box<dyn KeyValueStore>,
    files: Arc<dyn FileBridge>,
    environment: Box<dyn Environment>,
    formatter: Arc<dyn CodeFormatter>,
    keybindings: KeybindingService,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
}

impl Workbench {
    /// Restores the stored workspace and theme, then applies the theme.
    pub fn new(services: Services, settings: &Settings) -> std::io::Result<Self> {
        let Services {
            store: kv,
            files,
            mut environment,
            formatter,
            clock,
        } = services;

        let workspace = persistence::load(kv.as_ref());
        let theme = persistence::load_theme(kv.as_ref())
            .or(settings.theme)
            .unwrap_or_default();
        let config = EditorConfig::from_settings(&settings.editor);

        let mut store = Store::new(AppState::new(workspace, theme, config), clock);
        store.set_write_back(files.supports_write_back());
        environment.apply_theme(theme);

        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx)?;

        Ok(Self {
            store,
            kv,
            files,
            environment,
            formatter,
            keybindings: KeybindingService::from_rules(&settings.keybindings),
            runtime,
            rx,
        })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn runtime(&self) -> &AsyncRuntime {
        &self.runtime
    }

    pub fn keybindings(&self) -> &KeybindingService {
        &self.keybindings
    }

    pub fn active_projection(&mut self) -> Option<&Projection> {
        self.store.active_projection()
    }

    /// Reduces `action` and runs the effects it produced.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    /// Runs the command bound to `key`; returns `false` when nothing is bound.
    pub fn handle_key(&mut self, context: KeybindingContext, key: &Key) -> bool {
        let Some(command) = self.keybindings.resolve(context, key) else {
            return false;
        };
        tracing::trace!(?command, "key command");
        self.dispatch(Action::RunCommand(command));
        true
    }
}
