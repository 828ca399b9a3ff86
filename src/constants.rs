//! Application constants for the tradescope TUI.

use std::time::Duration;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer line (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Timing Constants
// ============================================================================

/// Interval between redraws of the main loop.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Lifetime of a short toast, in ticks.
pub const TOAST_SHORT_TICKS: u8 = 20;

/// Lifetime of a toast carrying an error, in ticks.
pub const TOAST_LONG_TICKS: u8 = 40;

// ============================================================================
// Input Limits
// ============================================================================

/// Longest wallet address accepted by the input popup.
pub const MAX_WALLET_INPUT_LEN: usize = 66;
