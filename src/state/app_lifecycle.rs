//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - `boot()` - Initial synths fetch and mount of the trade view
//! - Background fetches reporting back through the message channel

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::client::TradesApi;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, LoadRequest, StoreSnapshot, TradesView, UiState, WalletInfo};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App from configuration and an API implementation.
    #[must_use]
    pub fn new(config: AppConfig, api: Arc<dyn TradesApi>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let store = StoreSnapshot {
            wallet: WalletInfo {
                network_id: config.network_id,
                selected_wallet: config.wallet.clone(),
            },
            available_synths: Vec::new(),
            loading_screen_visible: false,
        };
        let view = TradesView::new(&store);

        Self {
            store,
            view,
            ui: UiState::new(),
            config,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            api,
            persist_config: true,
        }
    }

    /// Disables writing configuration changes to disk.
    #[must_use]
    #[cfg(test)]
    pub fn without_persistence(mut self) -> Self {
        self.persist_config = false;
        self
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.boot();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Shows the loading screen, fetches the tradable synths and mounts the
    /// trade view.
    pub fn boot(&mut self) {
        tracing::info!(
            network = %self.display_network(),
            wallet = self.store.wallet.active_wallet().unwrap_or("-"),
            "booting"
        );
        self.store.loading_screen_visible = true;
        self.spawn_synths_fetch();
        self.sync_view();
    }

    /// Hands the current store to the view and starts the load it asks for.
    pub(crate) fn sync_view(&mut self) {
        if let Some(request) = self.view.sync(&self.store) {
            self.spawn_trades_load(request);
        }
    }

    // ========================================================================
    // Background Fetches
    // ========================================================================

    pub(crate) fn spawn_trades_load(&self, request: LoadRequest) {
        let api = Arc::clone(&self.api);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = api.fetch_trades(request.network).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::TradesLoaded { request, result });
        });
    }

    pub(crate) fn spawn_synths_fetch(&self) {
        let api = Arc::clone(&self.api);
        let message_tx = self.message_tx.clone();
        let network = self.store.wallet.network_id;

        tokio::spawn(async move {
            let result = api
                .fetch_synths(network)
                .await
                .map_err(|err| err.to_string());
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::SynthsLoaded { network, result });
        });
    }

    /// Writes the configuration back to disk, logging failures.
    pub(crate) fn save_config(&self) {
        if !self.persist_config {
            return;
        }
        if let Err(err) = self.config.save() {
            tracing::warn!(error = %err, "failed to save config");
        }
    }
}
