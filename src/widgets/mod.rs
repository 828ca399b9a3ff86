//! Reusable widgets for the tradescope TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: Number and text formatting shared by widgets and the CLI
//! - [`trade_table`]: The trade history table and its row view model

pub mod helpers;
pub mod trade_table;

pub use trade_table::{EMPTY_NOTICE, TradeRow, TradeTableWidget};
