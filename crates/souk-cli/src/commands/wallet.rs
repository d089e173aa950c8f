// Rust guideline compliant 2026-08-14

//! Wallet command implementations.

use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;
use souk_app::{balances, deposit, top_up, MarketContext, SuccessEnvelope};

use super::session;
use crate::output::OutputFormatter;

fn parse_amount(raw: &str) -> Result<Decimal> {
    match raw.parse::<Decimal>() {
        Ok(amount) => Ok(amount),
        Err(_) => anyhow::bail!("Invalid amount: {} (expected a decimal number)", raw),
    }
}

/// Executes the wallet show command.
///
/// # Arguments
///
/// * `formatter` - Output formatter to use
///
/// # Errors
///
/// Returns an error if no session is active.
pub fn show(formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let user_id = session::require(&ctx)?;
    let user = ctx.find_user(&user_id, "User")?;
    let config = ctx.load_config()?;
    let view = balances(&user, &config.currency);
    print!("{}", formatter.format_balances(&view));
    Ok(())
}

/// Executes the wallet deposit command.
///
/// Adds funds to the logged-in user's banking account.
///
/// # Arguments
///
/// * `amount` - Amount as a decimal string
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if no session is active or the amount is invalid.
pub fn deposit_cmd(amount: &str, json: bool) -> Result<()> {
    let amount = parse_amount(amount)?;
    let ctx = MarketContext::discover(None)?;
    let user_id = session::require(&ctx)?;
    let user = deposit(&ctx, &user_id, amount)?;

    let config = ctx.load_config()?;
    let view = balances(&user, &config.currency);

    if json {
        let envelope = SuccessEnvelope::new(json!({ "balances": view }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Deposited {}", amount);
        println!("  Banking account: {}", view.banking_account);
        println!("  Wallet: {}", view.wallet);
    }

    Ok(())
}

/// Executes the wallet top-up command.
///
/// Moves funds from the logged-in user's banking account into the
/// spendable wallet.
///
/// # Arguments
///
/// * `amount` - Amount as a decimal string
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if no session is active, the amount is invalid, or
/// the banking account cannot cover it.
pub fn top_up_cmd(amount: &str, json: bool) -> Result<()> {
    let amount = parse_amount(amount)?;
    let ctx = MarketContext::discover(None)?;
    let user_id = session::require(&ctx)?;
    let user = top_up(&ctx, &user_id, amount)?;

    let config = ctx.load_config()?;
    let view = balances(&user, &config.currency);

    if json {
        let envelope = SuccessEnvelope::new(json!({ "balances": view }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Transferred {} to wallet", amount);
        println!("  Banking account: {}", view.banking_account);
        println!("  Wallet: {}", view.wallet);
    }

    Ok(())
}
