/// Per-transaction extraction of treasury balance changes
///
/// A parsed transaction yields zero, one or two events: one for the native
/// balance and one for the tracked token, each only when the change clears
/// the dust threshold.
use super::format::{exceeds_dust, format_native_amount, format_token_amount, signed_display};
use super::types::{AssetKind, Direction, HistorySettings, TransferEvent};
use crate::errors::TreasuryError;
use crate::rpc::{ParsedTransaction, TokenBalance, TransactionMeta};
use crate::utils::lamport_delta_to_sol;

/// Native balance change of `address` in SOL
///
/// 0 when the address is not in the account list, or when either the pre
/// or the post balance at its index is missing.
pub fn native_delta(tx: &ParsedTransaction, meta: &TransactionMeta, address: &str) -> f64 {
    let Some(index) = tx.account_addresses().iter().position(|key| *key == address) else {
        return 0.0;
    };

    match (meta.pre_balances.get(index), meta.post_balances.get(index)) {
        (Some(&pre), Some(&post)) => lamport_delta_to_sol(pre, post),
        _ => 0.0,
    }
}

fn owned_ui_amount(balances: &[TokenBalance], owner: &str, mint: &str) -> f64 {
    balances
        .iter()
        .find(|b| b.mint == mint && b.owner.as_deref() == Some(owner))
        .and_then(TokenBalance::ui_amount)
        .unwrap_or(0.0)
}

/// Tracked token change of `owner`, in UI units
pub fn token_delta(meta: &TransactionMeta, owner: &str, mint: &str) -> f64 {
    let pre = owned_ui_amount(meta.pre_token_balances(), owner, mint);
    let post = owned_ui_amount(meta.post_token_balances(), owner, mint);
    post - pre
}

/// Events for one transaction
///
/// A transaction without `meta` cannot be attributed and is reported as a
/// per-transaction failure.
pub fn extract_events(
    signature: &str,
    tx: &ParsedTransaction,
    settings: &HistorySettings,
) -> Result<Vec<TransferEvent>, TreasuryError> {
    let meta = tx
        .meta
        .as_ref()
        .ok_or_else(|| TreasuryError::per_transaction(signature, "transaction has no meta"))?;

    let block_time = tx.block_time_or_zero();
    let mut events = Vec::with_capacity(2);

    let native = native_delta(tx, meta, &settings.address);
    if exceeds_dust(native) {
        let direction = Direction::from_delta(native);
        let amount = native.abs();
        events.push(TransferEvent {
            signature: signature.to_string(),
            block_time,
            asset_kind: AssetKind::Native,
            direction,
            amount,
            display_amount: signed_display(
                direction,
                &format_native_amount(amount),
                &settings.native_symbol,
            ),
            link: settings.explorer_link(signature),
        });
    }

    let token = token_delta(meta, &settings.address, &settings.token_mint);
    if exceeds_dust(token) {
        let direction = Direction::from_delta(token);
        let amount = token.abs();
        events.push(TransferEvent {
            signature: signature.to_string(),
            block_time,
            asset_kind: AssetKind::TrackedToken,
            direction,
            amount,
            display_amount: signed_display(
                direction,
                &format_token_amount(amount),
                &settings.token_symbol,
            ),
            link: settings.explorer_link(signature),
        });
    }

    Ok(events)
}
