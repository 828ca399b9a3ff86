//! Trade history table widget.
//!
//! Displays the displayed trade list with selection and scrolling support.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, StatefulWidget, Table, TableState},
};
use serde::Serialize;

use crate::domain::{NetworkId, Trade, icon_path};
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR};

use super::helpers::{NOT_AVAILABLE, format_amounts, format_rate};

/// Notice shown instead of the table when there is nothing to display.
pub const EMPTY_NOTICE: &str = "No Trades recorded.";

/// Column headings, left to right.
pub const COLUMN_HEADERS: [&str; 5] = ["Synths", "Rate", "Amount (from/to)", "Date / Time", ""];

/// Text of the explorer link cell.
pub const LINK_LABEL: &str = "See txn";

// ============================================================================
// TradeRow
// ============================================================================

/// A trade formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRow {
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_icon: String,
    pub to_icon: String,
    pub rate: String,
    pub amount: String,
    pub date: String,
    pub link: Option<String>,
}

impl TradeRow {
    /// Formats a trade; `network` picks the explorer used for the link.
    #[must_use]
    pub fn new(trade: &Trade, network: NetworkId) -> Self {
        let (from_symbol, to_symbol) = trade.pair();
        Self {
            from_icon: icon_path(&from_symbol),
            to_icon: icon_path(&to_symbol),
            from_symbol,
            to_symbol,
            rate: format_rate(trade.cross_rate()),
            amount: format_amounts(trade.exchange_from_amount, trade.exchange_to_amount),
            date: trade.formatted_timestamp(),
            link: trade.explorer_url(network),
        }
    }

    /// `"FROM / TO"` label.
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!("{} / {}", self.from_symbol, self.to_symbol)
    }

    /// Tab separated line: pair, rate, amount, date, link.
    #[must_use]
    pub fn to_tsv(&self) -> String {
        [
            self.pair_label().as_str(),
            &self.rate,
            &self.amount,
            &self.date,
            self.link.as_deref().unwrap_or(NOT_AVAILABLE),
        ]
        .join("\t")
    }
}

// ============================================================================
// TradeTableWidget
// ============================================================================

/// A widget that renders trades as a table with a selectable row.
///
/// # Example
///
/// ```text
///   Synths            Rate              Amount (from/to)      Date / Time
/// ▶ ◆ sUSD / ◆ sTRX   0.025000          100/4,000.0000        14/11/2023 22:13PM  See txn
///   ◆ sTRX / ◆ sBTC   1,250.000000      500/0.4000            13/11/2023 8:01AM   See txn
/// ```
#[derive(Debug)]
pub struct TradeTableWidget<'a> {
    trades: &'a [Trade],
    network: NetworkId,
}

impl<'a> TradeTableWidget<'a> {
    /// Creates a table over the given trades.
    #[must_use]
    pub const fn new(trades: &'a [Trade], network: NetworkId) -> Self {
        Self { trades, network }
    }

    /// Returns the number of trades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Returns true if there are no trades.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    fn row(trade_row: &TradeRow) -> Row<'static> {
        let symbol_style = Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD);
        let pair = Line::from(vec![
            Span::styled("◆ ", Style::default().fg(ACCENT_COLOR)),
            Span::styled(trade_row.from_symbol.clone(), symbol_style),
            Span::styled(" / ", Style::default().fg(MUTED_COLOR)),
            Span::styled("◆ ", Style::default().fg(ACCENT_COLOR)),
            Span::styled(trade_row.to_symbol.clone(), symbol_style),
        ]);
        let link = match trade_row.link {
            Some(_) => Span::styled(LINK_LABEL, Style::default().fg(Color::Blue)),
            None => Span::styled(NOT_AVAILABLE, Style::default().fg(MUTED_COLOR)),
        };

        Row::new(vec![
            Cell::from(pair),
            Cell::from(trade_row.rate.clone()),
            Cell::from(trade_row.amount.clone()),
            Cell::from(trade_row.date.clone()).style(Style::default().fg(Color::Yellow)),
            Cell::from(link),
        ])
    }
}

impl StatefulWidget for TradeTableWidget<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.is_empty() {
            let x = area.x + (area.width.saturating_sub(EMPTY_NOTICE.len() as u16)) / 2;
            let y = area.y + area.height / 2;

            if y < area.bottom() && x < area.right() {
                let width = usize::from(area.right() - x);
                buf.set_stringn(x, y, EMPTY_NOTICE, width, Style::default().fg(MUTED_COLOR));
            }
            return;
        }

        let rows: Vec<Row> = self
            .trades
            .iter()
            .map(|trade| Self::row(&TradeRow::new(trade, self.network)))
            .collect();

        let header = Row::new(COLUMN_HEADERS)
            .style(Style::default().fg(MUTED_COLOR).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widths = [
            Constraint::Length(20),
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(19),
            Constraint::Length(7),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        StatefulWidget::render(table, area, buf, state);
    }
}

// ============================================================================
// Tests
// ============================================================================
