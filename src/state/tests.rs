//! App-level flows driven through a mock API.

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::commands::{AppCommand, InputContext};
use crate::test_utils::{MockTradesApi, TradeMother};

const WALLET: &str = "41bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

fn trades() -> Vec<Trade> {
    vec![
        TradeMother::at("old", 1_000),
        TradeMother::from_sender("mine", 2_000, &WALLET.to_uppercase()),
        TradeMother::with_to_currency("xdr", 3_000, "XDR"),
        TradeMother::at("new", 4_000),
    ]
}

fn app_with(api: MockTradesApi, wallet: Option<&str>) -> (App, Arc<MockTradesApi>) {
    let api = Arc::new(api);
    let config = AppConfig {
        wallet: wallet.map(str::to_string),
        ..AppConfig::default()
    };
    let app = App::new(config, api.clone()).without_persistence();
    (app, api)
}

async fn next_message(app: &mut App) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(5), app.message_rx.recv())
        .await
        .expect("message before timeout")
        .expect("channel open")
}

/// Handles messages until no load is pending and the loading screen is off.
async fn settle(app: &mut App) {
    loop {
        let message = next_message(app).await;
        app.handle_message(message);
        if !app.view.is_loading() && !app.store.loading_screen_visible {
            break;
        }
    }
}

fn hashes(app: &App) -> Vec<String> {
    app.displayed_trades()
        .iter()
        .map(|t| t.transaction_hash.clone())
        .collect()
}

#[tokio::test]
async fn test_boot_loads_all_trades_after_synths() {
    let (mut app, api) = app_with(MockTradesApi::new(trades(), &["sUSD", "sTRX"]), None);

    app.boot();
    assert!(app.store.loading_screen_visible);
    assert!(!app.view.is_loading());

    settle(&mut app).await;

    assert_eq!(app.store.available_synths, vec!["sUSD", "sTRX"]);
    assert!(app.view.showing_all());
    assert_eq!(hashes(&app), vec!["new", "mine", "old"]);
    assert_eq!(app.ui.selected, Some(0));
    assert_eq!(api.trade_calls(), 1);
    assert_eq!(api.requested_networks(), vec![None]);
}

#[tokio::test]
async fn test_boot_with_wallet_shows_own_trades() {
    let (mut app, _api) = app_with(MockTradesApi::new(trades(), &["sUSD"]), Some(WALLET));

    app.boot();
    settle(&mut app).await;

    assert!(!app.view.showing_all());
    assert_eq!(hashes(&app), vec!["mine"]);

    app.execute_command(AppCommand::ToggleTrades);
    assert_eq!(hashes(&app), vec!["new", "mine", "old"]);
    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("Showing all trades")
    );
}

#[tokio::test]
async fn test_failed_synths_still_load_trades() {
    let (mut app, api) = app_with(
        MockTradesApi::new(trades(), &["sUSD"]).failing_synths(),
        None,
    );

    app.boot();
    settle(&mut app).await;

    assert!(app.store.available_synths.is_empty());
    assert_eq!(api.trade_calls(), 1);
    assert_eq!(hashes(&app).len(), 3);
}

#[tokio::test]
async fn test_failed_load_keeps_nothing_and_reports() {
    let (mut app, _api) = app_with(
        MockTradesApi::new(trades(), &["sUSD"]).failing_trades(),
        None,
    );

    app.boot();
    settle(&mut app).await;

    assert!(app.view.displayed().is_none());
    assert!(app.view.has_no_trades());
    assert!(app.view.last_error().is_some_and(|e| e.contains("503")));
    assert!(
        app.ui
            .toast
            .as_ref()
            .is_some_and(|(msg, _)| msg.starts_with("[x] Failed to load trades"))
    );
}

#[tokio::test]
async fn test_refresh_twice_applies_latest_only() {
    let (mut app, api) = app_with(MockTradesApi::new(trades(), &["sUSD"]), None);
    app.boot();
    settle(&mut app).await;

    app.execute_command(AppCommand::Refresh);
    app.execute_command(AppCommand::Refresh);
    assert!(app.view.is_loading());

    let mut outcomes = Vec::new();
    for _ in 0..2 {
        if let AppMessage::TradesLoaded { request, result } = next_message(&mut app).await {
            outcomes.push(app.view.apply(&request, result));
        }
    }

    assert_eq!(api.trade_calls(), 3);
    assert!(outcomes.contains(&ApplyOutcome::Stale));
    assert!(outcomes.contains(&ApplyOutcome::Loaded { displayed: 3 }));
    assert!(!app.view.is_loading());
}

#[tokio::test]
async fn test_cycle_network_resets_and_reloads() {
    let (mut app, api) = app_with(MockTradesApi::new(trades(), &["sUSD"]), None);
    app.boot();
    settle(&mut app).await;

    app.execute_command(AppCommand::CycleNetwork);
    assert_eq!(app.store.wallet.network_id, Some(NetworkId::SHASTA));
    assert_eq!(app.config.network_id, Some(NetworkId::SHASTA));
    assert!(app.store.loading_screen_visible);
    assert!(app.view.displayed().is_none());

    settle(&mut app).await;

    assert_eq!(app.display_network(), NetworkId::SHASTA);
    assert_eq!(hashes(&app).len(), 3);
    assert_eq!(
        api.requested_networks(),
        vec![None, Some(NetworkId::SHASTA)]
    );
}

#[tokio::test]
async fn test_synths_for_previous_network_are_dropped() {
    let (mut app, _api) = app_with(MockTradesApi::new(Vec::new(), &[]), None);
    app.store.loading_screen_visible = true;

    app.handle_message(AppMessage::SynthsLoaded {
        network: Some(NetworkId::NILE),
        result: Ok(vec!["sUSD".to_string()]),
    });

    assert!(app.store.available_synths.is_empty());
    assert!(app.store.loading_screen_visible);
}

#[tokio::test]
async fn test_submitting_wallet_reloads_with_own_trades() {
    let (mut app, api) = app_with(MockTradesApi::new(trades(), &["sUSD"]), None);
    app.boot();
    settle(&mut app).await;

    app.execute_command(AppCommand::OpenWalletInput);
    assert_eq!(app.get_input_context(), InputContext::WalletInput);
    for c in WALLET.chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
    app.execute_command(AppCommand::SubmitWallet);

    assert_eq!(app.get_input_context(), InputContext::Main);
    assert_eq!(app.config.wallet.as_deref(), Some(WALLET));
    assert!(app.view.is_loading());

    settle(&mut app).await;
    assert_eq!(api.trade_calls(), 2);
    assert_eq!(hashes(&app), vec!["mine"]);

    app.execute_command(AppCommand::ClearWallet);
    assert!(app.store.wallet.active_wallet().is_none());
    settle(&mut app).await;
    assert!(app.view.showing_all());
}

#[tokio::test]
async fn test_invalid_wallet_shows_message() {
    let (mut app, api) = app_with(MockTradesApi::new(trades(), &["sUSD"]), None);

    app.execute_command(AppCommand::OpenWalletInput);
    for c in "not-a-wallet".chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
    app.execute_command(AppCommand::SubmitWallet);

    assert_eq!(app.get_input_context(), InputContext::MessagePopup);
    assert!(app.store.wallet.selected_wallet.is_none());
    assert_eq!(api.trade_calls(), 0);

    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.get_input_context(), InputContext::Main);
}

#[tokio::test]
async fn test_toggle_without_own_trades_is_a_noop() {
    let (mut app, _api) = app_with(MockTradesApi::new(trades(), &["sUSD"]), None);
    app.boot();
    settle(&mut app).await;

    app.execute_command(AppCommand::ToggleTrades);
    app.execute_command(AppCommand::ToggleTrades);

    assert!(app.view.showing_all());
    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("No trades of your own to show")
    );
}

#[tokio::test]
async fn test_selection_and_missing_link() {
    let (mut app, _api) = app_with(MockTradesApi::new(Vec::new(), &["sUSD"]), None);
    app.boot();
    settle(&mut app).await;

    assert!(app.view.has_no_trades());
    app.execute_command(AppCommand::MoveDown);
    assert_eq!(app.ui.selected, None);

    app.execute_command(AppCommand::OpenExplorer);
    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("[x] Explorer link unavailable")
    );
}

#[tokio::test]
async fn test_quit() {
    let (mut app, _api) = app_with(MockTradesApi::default(), None);
    app.execute_command(AppCommand::Quit);
    assert!(app.exit);
}
