// Rust guideline compliant 2026-08-18

//! Transaction settlement, cancellation, and status management.

use crate::error::Result;
use crate::ids::load_role;
use crate::market::MarketContext;
use souk_core::{validate_transition, Error as CoreError, Transaction, TransactionStatus};

/// Settles an in-progress transaction, releasing funds to the payee.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `txn_id` - Full ID of the transaction
///
/// # Returns
///
/// The completed transaction.
///
/// # Errors
///
/// Returns an unknown-ID error if the transaction or payee is missing,
/// or a conflict error if the transaction is not in progress.
pub fn settle_transaction(ctx: &MarketContext, txn_id: &str) -> Result<Transaction> {
    let transactions = ctx.transactions_store()?;
    let users = ctx.users_store()?;

    let txn = transactions.with_lock(|| {
        let mut txn = load_role(&transactions, txn_id, "Transaction")?;
        if txn.status != TransactionStatus::InProgress {
            return Err(CoreError::Conflict(format!(
                "Transaction is not in progress: {}",
                txn.id
            )));
        }

        let mut payee = load_role(&users, &txn.payee_id, "Payee")?;
        payee.wallet.credit(txn.amount)?;
        txn.set_status(TransactionStatus::Completed);

        transactions.save(&txn)?;
        users.save(&payee)?;
        Ok(txn)
    })?;
    Ok(txn)
}

/// Cancels an in-progress transaction, refunding the payer.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `txn_id` - Full ID of the transaction
///
/// # Returns
///
/// The cancelled transaction.
///
/// # Errors
///
/// Returns an unknown-ID error if the transaction or payer is missing,
/// or a conflict error if the transaction is not in progress.
pub fn cancel_transaction(ctx: &MarketContext, txn_id: &str) -> Result<Transaction> {
    let transactions = ctx.transactions_store()?;
    let users = ctx.users_store()?;

    let txn = transactions.with_lock(|| {
        let mut txn = load_role(&transactions, txn_id, "Transaction")?;
        if txn.status != TransactionStatus::InProgress {
            return Err(CoreError::Conflict(format!(
                "Transaction is not in progress: {}",
                txn.id
            )));
        }

        let mut payer = load_role(&users, &txn.payer_id, "Payer")?;
        payer.wallet.credit(txn.amount)?;
        txn.set_status(TransactionStatus::Cancelled);

        transactions.save(&txn)?;
        users.save(&payer)?;
        Ok(txn)
    })?;
    Ok(txn)
}

/// Assigns a transaction status from a dynamic JSON value.
///
/// Accepts canonical names and legacy camel-case aliases. This is a
/// bare status write with no money movement; funds only move through
/// [`settle_transaction`] and [`cancel_transaction`]. Transition
/// guarding follows the market's `strict_transitions` setting.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `txn_id` - Full ID of the transaction
/// * `value` - JSON value naming the status
///
/// # Returns
///
/// The transaction with the new status.
///
/// # Errors
///
/// Returns an unknown-ID error if the transaction is missing, a type
/// or value error for a malformed status, or a transition error in
/// strict mode.
pub fn set_transaction_status(
    ctx: &MarketContext,
    txn_id: &str,
    value: &serde_json::Value,
) -> Result<Transaction> {
    let config = ctx.load_config()?;
    let transactions = ctx.transactions_store()?;

    let txn = transactions.with_lock(|| {
        let mut txn = load_role(&transactions, txn_id, "Transaction")?;
        let status = TransactionStatus::from_value(value)?;
        validate_transition(&txn, status, config.strict_transitions)?;
        txn.set_status(status);
        transactions.save(&txn)?;
        Ok(txn)
    })?;
    Ok(txn)
}

/// Loads all transactions where a user pays or is paid, newest first.
///
/// # Errors
///
/// Returns an error if the transactions file cannot be read.
pub fn transactions_for_user(ctx: &MarketContext, user_id: &str) -> Result<Vec<Transaction>> {
    let mut transactions = ctx.transactions_store()?.load_all()?;
    transactions.retain(|t| t.payer_id == user_id || t.payee_id == user_id);
    transactions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(transactions)
}
