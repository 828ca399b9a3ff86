//! Panel rendering for the trade history.
//!
//! The main content area holds a single panel, "Trading History", with the
//! trade table, a scrollbar when the rows overflow, and the toggle hint when
//! a wallet is connected.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    symbols::scrollbar,
    text::Line,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, TableState},
};

use super::helpers::create_border_block;
use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR};
use crate::widgets::TradeTableWidget;

// ============================================================================
// Constants
// ============================================================================

/// Title of the trade panel.
pub const PANEL_TITLE: &str = "Trading History";

/// Rows taken by the table header and its margin.
const TABLE_HEADER_ROWS: u16 = 2;

// ============================================================================
// Public Panel Rendering Functions
// ============================================================================

/// Hint for the toggle key, shown only while a wallet is connected.
#[must_use]
pub fn toggle_hint(app: &App) -> Option<&'static str> {
    app.store.wallet.active_wallet()?;
    Some(if app.view.showing_all() {
        "m: Show my trades"
    } else {
        "m: Show all trades"
    })
}

/// Renders the trade history panel.
///
/// The bottom border shows the explorer link of the selected trade, or the
/// last load error while there is nothing to display.
pub fn render_trades(app: &App, frame: &mut Frame, area: Rect) {
    let focused = !app.ui.has_active_popup();
    let mut block = create_border_block(PANEL_TITLE, focused);

    if let Some(hint) = toggle_hint(app) {
        block = block.title(
            Line::styled(format!(" {hint} "), Style::default().fg(PRIMARY_COLOR)).right_aligned(),
        );
    }

    let network = app.display_network();
    if let Some(error) = app.view.last_error().filter(|_| app.view.has_no_trades()) {
        block = block.title_bottom(
            Line::styled(format!(" {error} "), Style::default().fg(ERROR_COLOR)).right_aligned(),
        );
    } else if let Some(link) = app
        .selected_trade()
        .and_then(|trade| trade.explorer_url(network))
    {
        block = block.title_bottom(
            Line::styled(format!(" {link} "), Style::default().fg(MUTED_COLOR)).right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let table = TradeTableWidget::new(app.displayed_trades(), network);
    let row_count = table.len();
    let mut state = TableState::default().with_selected(app.ui.selected);
    frame.render_stateful_widget(table, inner, &mut state);

    let visible_rows = inner.height.saturating_sub(TABLE_HEADER_ROWS) as usize;
    if row_count > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(row_count).position(app.ui.selected.unwrap_or(0));
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .symbols(scrollbar::VERTICAL)
            .begin_symbol(None)
            .end_symbol(None);
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
