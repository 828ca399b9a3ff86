//! UI rendering module for the tradescope TUI.
//!
//! # Module Structure
//!
//! - `panels` - The trade history panel
//! - `popups` - Modal dialogs (wallet input, messages)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws the header, trade panel and footer, then any popup, then the toast
/// on top of everything.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    panels::render_trades(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, size);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

/// Render popup overlays based on current popup state
fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::WalletInput(input) => {
            popups::render_wallet_popup(frame, area, input);
        }
        PopupState::Message(message) => {
            popups::render_message_popup(frame, area, message);
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
