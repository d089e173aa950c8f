// Rust guideline compliant 2026-08-18

//! Wallet funding operations and balance views.

use crate::accounts::update_field;
use crate::error::Result;
use crate::market::MarketContext;
use rust_decimal::Decimal;
use serde::Serialize;
use souk_core::User;

/// A user's balances at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceView {
    /// Spendable wallet balance.
    pub wallet: Decimal,
    /// Backing account balance.
    pub banking_account: Decimal,
    /// Sum of both balances.
    pub total: Decimal,
    /// Display currency code from the market configuration.
    pub currency: String,
}

/// Builds a balance view for a user.
#[must_use]
pub fn balances(user: &User, currency: &str) -> BalanceView {
    BalanceView {
        wallet: user.wallet.balance,
        banking_account: user.wallet.banking_account.balance,
        total: user.wallet.balance + user.wallet.banking_account.balance,
        currency: currency.to_string(),
    }
}

/// Adds external funds to a user's banking account.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `user_id` - Full ID of the user
/// * `amount` - Amount to add
///
/// # Returns
///
/// The user after the deposit.
///
/// # Errors
///
/// Returns an unknown-ID error if no user has the ID, or a validation
/// error for a negative amount.
pub fn deposit(ctx: &MarketContext, user_id: &str, amount: Decimal) -> Result<User> {
    update_field(ctx, user_id, |user, _| {
        user.wallet.banking_account.add_balance(amount)
    })
}

/// Moves funds from a user's banking account into the wallet.
///
/// The sum of the two balances is unchanged by this operation.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `user_id` - Full ID of the user
/// * `amount` - Amount to transfer
///
/// # Returns
///
/// The user after the transfer.
///
/// # Errors
///
/// Returns an unknown-ID error if no user has the ID, a validation
/// error for a negative amount, or a conflict error if the banking
/// account cannot cover the transfer.
pub fn top_up(ctx: &MarketContext, user_id: &str, amount: Decimal) -> Result<User> {
    update_field(ctx, user_id, |user, _| user.wallet.transfer_balance(amount))
}
