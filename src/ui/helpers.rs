//! UI helper functions for creating styled blocks.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block with proper styling based on focus state.
///
/// # Arguments
///
/// * `title` - The title text to display in the block border
/// * `focused` - Whether the block should be styled as focused/active
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        layout::{Constraint, Direction, Layout},
    };

    #[test]
    fn test_all_block_states() {
        let backend = TestBackend::new(40, 9);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let areas = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3); 3])
                    .split(frame.area());

                frame.render_widget(create_border_block("Unfocused", false), areas[0]);
                frame.render_widget(create_border_block("Focused", true), areas[1]);
                frame.render_widget(create_popup_block("Popup"), areas[2]);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..40).map(|x| buffer[(x, y)].symbol()).collect() };

        assert!(row(0).starts_with("╭ Unfocused ─"));
        assert!(row(3).starts_with("╔ ● Focused ═"));
        assert!(row(6).contains(" Popup "));
        assert!(row(6).starts_with("╭─"));
    }
}
