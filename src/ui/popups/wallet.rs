//! Wallet address input popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{BORDER_STYLE, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Width of the popup, wide enough for a hex address with prefix.
const POPUP_WIDTH: u16 = 76;

/// Renders the wallet popup with the text typed so far.
///
/// Submitting an empty input disconnects the wallet.
pub fn render(frame: &mut Frame, area: Rect, input: &str) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, 9);

    let popup_block = create_popup_block("Connect Wallet");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    if inner_area.height < 5 || inner_area.width < 6 {
        return;
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(" Address (T... base58 or hex) ")
        .title_alignment(Alignment::Left);

    let input_area = Rect::new(inner_area.x + 1, inner_area.y + 1, inner_area.width - 2, 3);
    frame.render_widget(input_block.clone(), input_area);

    let input_text = Paragraph::new(format!("{input}▏")).style(Style::default().fg(PRIMARY_COLOR));
    frame.render_widget(input_text, input_block.inner(input_area));

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height - 2,
        popup_area.width,
        1,
    );
    let help = Paragraph::new("Enter:Connect  Esc:Cancel  (empty disconnects)")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

// ============================================================================
// Tests
// ============================================================================
