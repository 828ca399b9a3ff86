//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. Messages prefixed with
//! `[+]` render in the success color, `[x]` in the error color.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Extra padding added to message length for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message)))
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

#[must_use]
fn determine_text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::normal(Rect::new(0, 0, 100, 50), "Showing all trades")]
    #[case::long(
        Rect::new(0, 0, 100, 50),
        "[x] Failed to load trades: API returned status 503 for http://localhost:8080/api/exchanges"
    )]
    #[case::short(Rect::new(0, 0, 100, 50), "Hi")]
    #[case::small_area(Rect::new(0, 0, 30, 10), "Test")]
    fn test_toast_position_stays_inside(#[case] area: Rect, #[case] message: &str) {
        let toast = calculate_toast_position(area, message);

        assert_eq!(toast.height, TOAST_HEIGHT);
        assert!(toast.width >= MIN_TOAST_WIDTH);
        assert!(toast.width <= (area.width / 2).max(MIN_TOAST_WIDTH));
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[rstest]
    #[case::success("[+] Opened in browser", SUCCESS_COLOR)]
    #[case::error("[x] Explorer link unavailable", ERROR_COLOR)]
    #[case::info("Showing my trades", Color::White)]
    #[case::empty("", Color::White)]
    fn test_determine_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(determine_text_color(message), expected);
    }
}
