use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_core::state::AppState;
use lexi_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::spawn_stdin_reader;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64), // state transitions and notices
            ui_to_app: kanal::bounded_async(16), // prompt lines
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
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

    /// Sender the prompt reader feeds; tests inject events through it
    pub fn input_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    pub fn spawn_tasks<W>(&self, out: W, interactive: bool) -> JoinSet<anyhow::Result<()>>
    where
        W: std::io::Write + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop, piped input is handled one search at a time
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
            !interactive,
        ));

        // UI loop
        tasks.spawn(ui_loop(self.channels.app_to_ui.1.clone(), out, interactive));

        tasks
    }

    /// Start reading prompt lines from stdin
    pub fn spawn_stdin(&self) {
        spawn_stdin_reader(self.input_sender());
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
