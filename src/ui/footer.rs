//! Footer rendering module for the tradescope TUI.
//!
//! Shows the keyboard shortcuts of the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

// ============================================================================
// Footer Rendering
// ============================================================================

/// Shortcut hints for an input context.
#[must_use]
pub const fn shortcuts(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => {
            "q:Quit  r:Reload  m:Mine/All  ↑↓:Select  Enter:Open  n:Network  w:Wallet  x:Disconnect"
        }
        InputContext::WalletInput => "Enter:Connect  Esc:Cancel  Backspace:Delete",
        InputContext::MessagePopup => "Esc:Close  Enter:Close",
    }
}

/// Renders the footer bar with keyboard shortcuts.
///
/// Popup shortcuts are highlighted since they replace the usual ones.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let context = app.get_input_context();
    let color = if context.is_popup() {
        PRIMARY_COLOR
    } else {
        MUTED_COLOR
    };
    let footer = Paragraph::new(shortcuts(context))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::AppMother;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_to_string(buffer: &ratatui::buffer::Buffer, width: u16) -> String {
        (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    /// Tests footer displays all required keyboard shortcuts.
    #[test]
    fn test_footer_displays_all_shortcuts() {
        let app = AppMother::empty();
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer(), 100);
        for shortcut in ["q:Quit", "r:Reload", "m:Mine/All", "Enter:Open", "n:Network", "w:Wallet"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_follows_popup_context() {
        let mut app = AppMother::empty();
        app.ui.open_wallet_input(None);

        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer(), 80);
        assert!(content.contains("Enter:Connect"));
        assert!(!content.contains("q:Quit"));
        assert_eq!(terminal.backend().buffer()[(40, 0)].fg, PRIMARY_COLOR);
    }

    #[test]
    fn test_footer_zero_height_does_not_panic() {
        let app = AppMother::empty();
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app))
            .unwrap();
    }
}
