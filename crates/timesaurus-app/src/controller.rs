use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use timesaurus_core::types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::{spawn_stdin_reader, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64), // frames and suggestion lists
            ui_to_app: kanal::bounded_async(64), // one event per command, two for `set`
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // UI loop
        let input_rx = spawn_stdin_reader();
        let app_to_ui_rx = self.channels.app_to_ui.1.clone();
        let ui_to_app_tx = self.channels.ui_to_app.0.clone();
        let config = self.state.config.clone();
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            let mut stdout = std::io::stdout();
            ui_loop(input_rx, app_to_ui_rx, ui_to_app_tx, config, cancel, &mut stdout).await
        });

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
