//! Message processing for the tradescope application.
//!
//! Background fetches report back here; every store change is followed by
//! a view sync.

use super::{App, AppMessage, ApplyOutcome};
use crate::constants::{TOAST_LONG_TICKS, TOAST_SHORT_TICKS};

impl App {
    /// Drains the message channel without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SynthsLoaded { network, result } => {
                if network != self.store.wallet.network_id {
                    tracing::debug!(?network, "dropping synths for a previous network");
                    return;
                }
                match result {
                    Ok(synths) => {
                        tracing::info!(count = synths.len(), "synths loaded");
                        self.store.available_synths = synths;
                    }
                    Err(error) => {
                        tracing::warn!(%error, "synths fetch failed");
                        self.ui
                            .show_toast(format!("[x] Could not load synths: {error}"), TOAST_LONG_TICKS);
                    }
                }
                self.store.loading_screen_visible = false;
                self.sync_view();
            }
            AppMessage::TradesLoaded { request, result } => {
                match self.view.apply(&request, result) {
                    ApplyOutcome::Loaded { displayed } => {
                        tracing::info!(request = request.id.get(), displayed, "trades loaded");
                    }
                    ApplyOutcome::Failed(error) => {
                        self.ui
                            .show_toast(format!("[x] Failed to load trades: {error}"), TOAST_LONG_TICKS);
                    }
                    ApplyOutcome::Stale => {}
                }
                self.ui.clamp_selection(self.displayed_trades().len());
            }
        }
    }

    /// Toast shown after a successful toggle.
    pub(crate) fn announce_filter(&mut self) {
        let label = if self.view.showing_all() {
            "Showing all trades"
        } else {
            "Showing my trades"
        };
        self.ui.show_toast(label, TOAST_SHORT_TICKS);
    }
}
