// Rust guideline compliant 2026-08-14

//! Transaction command implementations.

use anyhow::Result;
use serde_json::json;
use souk_app::{
    cancel_transaction, resolve_transaction_id, set_transaction_status, settle_transaction,
    transactions_for_user, MarketContext, SuccessEnvelope,
};

use super::session;
use crate::output::OutputFormatter;

fn resolve(ctx: &MarketContext, partial: &str) -> Result<String> {
    let transactions = ctx.transactions_store()?.load_all()?;
    Ok(resolve_transaction_id(partial, &transactions)?)
}

/// Executes the txn list command.
///
/// Shows transactions where the logged-in user pays or is paid.
///
/// # Errors
///
/// Returns an error if no session is active.
pub fn list(formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let user_id = session::require(&ctx)?;
    let transactions = transactions_for_user(&ctx, &user_id)?;
    print!("{}", formatter.format_transaction_list(&transactions));
    Ok(())
}

/// Executes the txn show command.
///
/// # Arguments
///
/// * `id` - Full or partial transaction ID
/// * `formatter` - Output formatter to use
///
/// # Errors
///
/// Returns an error if the ID matches no transaction or is ambiguous.
pub fn show(id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let transactions = ctx.transactions_store()?.load_all()?;
    let txn_id = resolve_transaction_id(id, &transactions)?;
    let txn = transactions
        .into_iter()
        .find(|t| t.id == txn_id)
        .ok_or_else(|| anyhow::anyhow!("Transaction not found: {}", txn_id))?;
    print!("{}", formatter.format_transaction(&txn));
    Ok(())
}

/// Executes the txn settle command.
///
/// Completes an in-progress transaction and pays the payee.
///
/// # Arguments
///
/// * `id` - Full or partial transaction ID
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if the transaction is missing or not in progress.
pub fn settle(id: &str, json: bool) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let txn_id = resolve(&ctx, id)?;
    let txn = settle_transaction(&ctx, &txn_id)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({ "transaction": txn }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Settled transaction {}", txn.id);
        println!("  Paid {} to {}", txn.amount, txn.payee_id);
    }

    Ok(())
}

/// Executes the txn cancel command.
///
/// Cancels an in-progress transaction and refunds the payer.
///
/// # Arguments
///
/// * `id` - Full or partial transaction ID
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if the transaction is missing or not in progress.
pub fn cancel(id: &str, json: bool) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let txn_id = resolve(&ctx, id)?;
    let txn = cancel_transaction(&ctx, &txn_id)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({ "transaction": txn }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Cancelled transaction {}", txn.id);
        println!("  Refunded {} to {}", txn.amount, txn.payer_id);
    }

    Ok(())
}

/// Executes the txn status command.
///
/// Sets the raw status of a transaction without moving funds. The value
/// is parsed as JSON first, so `3`, `true`, and `null` keep their JSON
/// types; anything unparseable is treated as a bare status string.
///
/// # Arguments
///
/// * `id` - Full or partial transaction ID
/// * `value` - Status name, alias, or raw JSON value
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if the transaction is missing, the status is not
/// recognized, or the transition is not allowed.
pub fn status(id: &str, value: &str, json: bool) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let txn_id = resolve(&ctx, id)?;

    let parsed = serde_json::from_str::<serde_json::Value>(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    let txn = set_transaction_status(&ctx, &txn_id, &parsed)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({ "transaction": txn }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Transaction {} is now {:?}", txn.id, txn.status);
    }

    Ok(())
}
