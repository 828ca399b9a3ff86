//! Popup UI components for the tradescope TUI.
//!
//! Popups are modal overlays drawn on top of the trade panel; they take all
//! key input until dismissed.

pub mod message;
pub mod wallet;

pub use message::render as render_message_popup;
pub use wallet::render as render_wallet_popup;
