//! UI state management for the tradescope TUI.
//!
//! Presentation concerns only: the open popup, the toast and the table
//! selection. Trade data lives in [`TradesView`](super::TradesView).

use crate::constants::MAX_WALLET_INPUT_LEN;

// ============================================================================
// Popup State
// ============================================================================

/// Popup/modal currently shown on top of the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup.
    #[default]
    None,
    /// Wallet address input with the text typed so far.
    WalletInput(String),
    /// Blocking message, dismissed with Esc or Enter.
    Message(String),
}

impl PopupState {
    /// Returns `true` if a popup is showing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: popup, toast and selected row.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new();
/// ui.show_toast("Showing all trades", 20);
/// ui.select_next(trade_count);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Current popup/modal state.
    pub popup_state: PopupState,

    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,

    /// Index of the selected table row.
    pub selected: Option<usize>,
}

impl UiState {
    /// Creates a new `UiState` with no popup and no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if the popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Opens the wallet input prefilled with `current`.
    pub fn open_wallet_input(&mut self, current: Option<&str>) {
        self.popup_state = PopupState::WalletInput(current.unwrap_or_default().to_string());
    }

    /// Appends a character to the wallet input, ignoring whitespace and
    /// input beyond the longest accepted address.
    pub fn push_wallet_char(&mut self, c: char) {
        if let PopupState::WalletInput(ref mut input) = self.popup_state
            && !c.is_whitespace()
            && input.chars().count() < MAX_WALLET_INPUT_LEN
        {
            input.push(c);
        }
    }

    /// Deletes the last character of the wallet input.
    pub fn pop_wallet_char(&mut self) {
        if let PopupState::WalletInput(ref mut input) = self.popup_state {
            input.pop();
        }
    }

    /// Text typed in the wallet popup, if it is open.
    #[must_use]
    pub fn wallet_input(&self) -> Option<&str> {
        match &self.popup_state {
            PopupState::WalletInput(input) => Some(input),
            _ => None,
        }
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Moves the selection down, stopping at the last row.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
    }

    /// Moves the selection up, stopping at the first row.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Keeps the selection inside a table of `len` rows.
    ///
    /// A non-empty table always has a selected row.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }
}

// ============================================================================
// Tests
// ============================================================================
