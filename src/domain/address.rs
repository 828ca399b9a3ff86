//! Wallet address normalization.
//!
//! Wallets hand out base58check addresses (`T...`) while the API reports
//! senders in hex. Both sides are reduced to lowercase hex without a `0x`
//! prefix before they are compared.

use super::TradeError;

/// Length of a decoded base58check payload (version byte + 20 byte hash).
const BASE58_PAYLOAD_LEN: usize = 21;

/// Normalizes an address to lowercase hex without a `0x` prefix.
///
/// Base58check input is decoded and hex-encoded. Everything else is treated
/// as hex text and only has its prefix and case normalized.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    if let Some(hex) = decode_base58check(trimmed) {
        return hex;
    }

    strip_hex_prefix(trimmed).to_ascii_lowercase()
}

/// Strict variant of [`normalize_address`] used for user input.
///
/// # Errors
///
/// Returns [`TradeError::InvalidAddress`] when the input is neither a valid
/// base58check address nor a non-empty hex string.
pub fn parse_wallet_address(address: &str) -> Result<String, TradeError> {
    let trimmed = address.trim();
    if let Some(hex) = decode_base58check(trimmed) {
        return Ok(hex);
    }

    let body = strip_hex_prefix(trimmed);
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TradeError::invalid_address(trimmed));
    }
    Ok(body.to_ascii_lowercase())
}

fn strip_hex_prefix(address: &str) -> &str {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
}

fn decode_base58check(address: &str) -> Option<String> {
    // Hex text can also be valid base58; the checksum and length reject it.
    let payload = bs58::decode(address).with_check(None).into_vec().ok()?;
    (payload.len() == BASE58_PAYLOAD_LEN).then(|| hex::encode(payload))
}

// ============================================================================
// Tests
// ============================================================================
