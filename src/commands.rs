//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into an [`AppCommand`] by the [`KeyMapper`]
//! before anything touches application state, so keybindings can be tested
//! in isolation.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//!
//! match command {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::ToggleTrades => app.toggle_trades(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the trade table.
    Main,
    /// The wallet address popup is open.
    WalletInput,
    /// A message popup is open.
    MessagePopup,
}

impl InputContext {
    /// Returns `true` if this context represents a popup state.
    #[must_use]
    pub const fn is_popup(&self) -> bool {
        !matches!(self, Self::Main)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Reload trades from the API.
    Refresh,

    // === Trade View ===
    /// Switch between all trades and the wallet's own trades.
    ToggleTrades,
    /// Move selection up in the table.
    MoveUp,
    /// Move selection down in the table.
    MoveDown,
    /// Open the selected trade in the block explorer.
    OpenExplorer,

    // === Wallet and Network ===
    /// Switch to the next known network.
    CycleNetwork,
    /// Open the wallet address popup.
    OpenWalletInput,
    /// Disconnect the wallet.
    ClearWallet,

    // === Wallet Input Actions ===
    /// Type a character in the wallet input.
    TypeChar(char),
    /// Delete the last character in the wallet input.
    Backspace,
    /// Submit the wallet address.
    SubmitWallet,

    // === Popup Control ===
    /// Dismiss the current popup.
    Dismiss,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// This is a pure function with no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::WalletInput => Self::map_wallet_input_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    /// Maps keys in the main browsing context.
    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('m') | KeyCode::Char(' ') => AppCommand::ToggleTrades,
            KeyCode::Char('n') => AppCommand::CycleNetwork,
            KeyCode::Char('w') => AppCommand::OpenWalletInput,
            KeyCode::Char('x') => AppCommand::ClearWallet,
            KeyCode::Char('o') | KeyCode::Enter => AppCommand::OpenExplorer,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the wallet address popup.
    fn map_wallet_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitWallet,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the message popup.
    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_popup_contexts() {
        assert!(!InputContext::Main.is_popup());
        assert!(InputContext::WalletInput.is_popup());
        assert!(InputContext::MessagePopup.is_popup());
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), AppCommand::Quit)]
    #[case::refresh(KeyCode::Char('r'), AppCommand::Refresh)]
    #[case::toggle(KeyCode::Char('m'), AppCommand::ToggleTrades)]
    #[case::toggle_space(KeyCode::Char(' '), AppCommand::ToggleTrades)]
    #[case::network(KeyCode::Char('n'), AppCommand::CycleNetwork)]
    #[case::wallet(KeyCode::Char('w'), AppCommand::OpenWalletInput)]
    #[case::clear_wallet(KeyCode::Char('x'), AppCommand::ClearWallet)]
    #[case::open(KeyCode::Enter, AppCommand::OpenExplorer)]
    #[case::open_o(KeyCode::Char('o'), AppCommand::OpenExplorer)]
    #[case::up(KeyCode::Up, AppCommand::MoveUp)]
    #[case::down_j(KeyCode::Char('j'), AppCommand::MoveDown)]
    #[case::unbound(KeyCode::Char('z'), AppCommand::Noop)]
    fn test_main_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            KeyMapper::map_key(key_event(code), &InputContext::Main),
            expected
        );
    }

    #[test]
    fn test_wallet_input_types_every_char() {
        let ctx = InputContext::WalletInput;
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('q')), &ctx),
            AppCommand::TypeChar('q')
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Enter), &ctx),
            AppCommand::SubmitWallet
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Backspace), &ctx),
            AppCommand::Backspace
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Esc), &ctx),
            AppCommand::Dismiss
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key_event(KeyCode::Char('c'))
        };
        for ctx in [
            InputContext::Main,
            InputContext::WalletInput,
            InputContext::MessagePopup,
        ] {
            assert_eq!(KeyMapper::map_key(ctrl_c, &ctx), AppCommand::Quit);
        }
    }

    #[test]
    fn test_message_popup_keys() {
        let ctx = InputContext::MessagePopup;
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Esc), &ctx),
            AppCommand::Dismiss
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('m')), &ctx),
            AppCommand::Noop
        );
    }
}
