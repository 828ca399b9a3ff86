//! Command execution and input handling for the tradescope application.
//!
//! Key events are mapped to commands by [`KeyMapper`] and executed here.

use crossterm::event::KeyEvent;

use super::{App, PopupState};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::{TOAST_LONG_TICKS, TOAST_SHORT_TICKS};
use crate::domain::parse_wallet_address;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context from the popup state.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::None => InputContext::Main,
            PopupState::WalletInput(_) => InputContext::WalletInput,
            PopupState::Message(_) => InputContext::MessagePopup,
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.refresh();
            }

            // === Trade View ===
            AppCommand::ToggleTrades => {
                self.toggle_trades();
            }
            AppCommand::MoveUp => {
                self.ui.select_previous(self.displayed_trades().len());
            }
            AppCommand::MoveDown => {
                self.ui.select_next(self.displayed_trades().len());
            }
            AppCommand::OpenExplorer => {
                self.open_in_browser();
            }

            // === Wallet and Network ===
            AppCommand::CycleNetwork => {
                self.cycle_network();
            }
            AppCommand::OpenWalletInput => {
                let current = self.store.wallet.active_wallet().map(str::to_string);
                self.ui.open_wallet_input(current.as_deref());
            }
            AppCommand::ClearWallet => {
                if self.store.wallet.active_wallet().is_some() {
                    self.set_wallet(None);
                    self.ui.show_toast("Wallet disconnected", TOAST_SHORT_TICKS);
                }
            }

            // === Wallet Input Actions ===
            AppCommand::TypeChar(c) => {
                self.ui.push_wallet_char(c);
            }
            AppCommand::Backspace => {
                self.ui.pop_wallet_char();
            }
            AppCommand::SubmitWallet => {
                self.submit_wallet();
            }

            // === Popup Control ===
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Starts a fresh load regardless of the reload trigger.
    pub(crate) fn refresh(&mut self) {
        let request = self.view.begin_load(&self.store);
        self.spawn_trades_load(request);
        self.ui.show_toast("Reloading trades...", TOAST_SHORT_TICKS);
    }

    pub(crate) fn toggle_trades(&mut self) {
        if self.view.toggle() {
            self.ui.selected = None;
            self.ui.clamp_selection(self.displayed_trades().len());
            self.announce_filter();
        } else if self.view.lists().is_some() {
            self.ui
                .show_toast("No trades of your own to show", TOAST_SHORT_TICKS);
        }
    }

    pub(crate) fn open_in_browser(&mut self) {
        let network = self.display_network();
        let url = self
            .selected_trade()
            .and_then(|trade| trade.explorer_url(network));

        match url {
            Some(url) => match open::that(&url) {
                Ok(()) => {
                    tracing::debug!(%url, "opened explorer link");
                    self.ui
                        .show_toast("[+] Opened in browser", TOAST_SHORT_TICKS);
                }
                Err(e) => {
                    self.ui
                        .show_toast(format!("[x] Failed to open browser: {e}"), TOAST_LONG_TICKS);
                }
            },
            None => {
                self.ui
                    .show_toast("[x] Explorer link unavailable", TOAST_SHORT_TICKS);
            }
        }
    }

    /// Switches to the next known network.
    ///
    /// The view is reset, the synths are refetched with the loading screen
    /// on, and the reload happens once that fetch settles.
    pub(crate) fn cycle_network(&mut self) {
        let next = self.display_network().next();
        tracing::info!(network = %next, "switching network");

        self.store.wallet.network_id = Some(next);
        self.store.available_synths.clear();
        self.store.loading_screen_visible = true;
        self.view.reset(&self.store);
        self.ui.selected = None;

        self.config.network_id = Some(next);
        self.save_config();

        self.spawn_synths_fetch();
        self.sync_view();
        self.ui
            .show_toast(format!("Switched to {next}"), TOAST_SHORT_TICKS);
    }

    fn submit_wallet(&mut self) {
        let Some(input) = self.ui.wallet_input().map(str::to_string) else {
            return;
        };
        self.ui.dismiss_popup();

        if input.trim().is_empty() {
            self.set_wallet(None);
            return;
        }

        match parse_wallet_address(&input) {
            Ok(_) => {
                self.set_wallet(Some(input.trim().to_string()));
                self.ui.show_toast("[+] Wallet connected", TOAST_SHORT_TICKS);
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected wallet input");
                self.ui.show_message(err.to_string());
            }
        }
    }

    /// Selects a wallet (or none), persists it, and lets the view react.
    pub(crate) fn set_wallet(&mut self, wallet: Option<String>) {
        self.store.wallet.selected_wallet = wallet.clone();
        self.config.wallet = wallet;
        self.save_config();
        self.sync_view();
    }
}
