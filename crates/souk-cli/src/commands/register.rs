// Rust guideline compliant 2026-08-14

//! Register command implementation.

use anyhow::Result;
use serde_json::json;
use souk_app::{register, MarketContext, SuccessEnvelope};

use crate::output::user_json;

/// Executes the register command.
///
/// # Arguments
///
/// * `username` - Desired display name
/// * `email` - Login email, unique across the market
/// * `password` - Plaintext password
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if a field is malformed or the email is taken.
pub fn execute(username: &str, email: &str, password: &str, json: bool) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let user = register(&ctx, username, email, password)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({ "user": user_json(&user) }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Registered {} <{}>", user.username, user.email);
        println!("  ID: {}", user.id);
        println!();
        println!("Log in with 'souk login'");
    }

    Ok(())
}
