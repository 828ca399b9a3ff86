//! Layout calculations for the tradescope TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (logo, network, wallet)
    pub header: Rect,
    /// Trade table panel
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate a centered popup area within a parent area
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
