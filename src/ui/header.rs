//! Header rendering for the tradescope TUI.
//!
//! Renders the logo, a loading spinner and the network / wallet / filter
//! status on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::widgets::helpers::truncate_middle;

use super::helpers::create_border_block;

/// Frames of the loading spinner.
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Longest wallet label shown in the header.
const WALLET_LABEL_LEN: usize = 16;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let inner = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 1);

    let mut left = vec![
        "[".into(),
        "trade".green().bold(),
        "scope".blue().bold(),
        "]".into(),
    ];
    if app.store.loading_screen_visible || app.view.is_loading() {
        let frame_index = (app.animation_tick % SPINNER.len() as u64) as usize;
        left.push(Span::styled(
            format!("  {} Loading...", SPINNER[frame_index]),
            Style::default().fg(WARNING_COLOR),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), inner);

    if area.width > 40 {
        let status = Paragraph::new(status_line(app)).alignment(Alignment::Right);
        frame.render_widget(status, inner);
    }
}

/// Network, wallet and filter indicator.
fn status_line(app: &App) -> Line<'static> {
    let wallet = app
        .store
        .wallet
        .active_wallet()
        .map_or_else(|| "not connected".to_string(), |w| truncate_middle(w, WALLET_LABEL_LEN));
    let filter = if app.view.showing_all() { "All" } else { "Mine" };

    Line::from(vec![
        Span::styled(
            app.display_network().to_string(),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(MUTED_COLOR)),
        Span::raw(format!("Wallet: {wallet}")),
        Span::styled(" │ ", Style::default().fg(MUTED_COLOR)),
        Span::styled(filter, Style::default().fg(PRIMARY_COLOR)),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AppMother, TradeMother};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..100).map(|x| buffer[(x, 1)].symbol()).collect()
    }

    #[test]
    fn test_header_without_wallet() {
        let app = AppMother::empty();
        let line = rendered(&app);

        assert!(line.contains("[tradescope]"));
        assert!(line.contains("Mainnet (1)"));
        assert!(line.contains("Wallet: not connected"));
        assert!(line.contains("All"));
        assert!(!line.contains("Loading"));
    }

    #[test]
    fn test_header_with_wallet_and_loading() {
        let wallet = "41bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
        let mut app = AppMother::loaded(vec![TradeMother::from_sender("a", 1, wallet)], Some(wallet));
        app.store.loading_screen_visible = true;
        let line = rendered(&app);

        assert!(line.contains("Loading..."));
        assert!(line.contains("Wallet: 41bbbbb...bbbbbb"));
        assert!(line.contains("Mine"));
    }
}
