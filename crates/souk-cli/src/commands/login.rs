// Rust guideline compliant 2026-08-14

//! Login command implementation.

use anyhow::Result;
use serde_json::json;
use souk_app::{login, MarketContext, SuccessEnvelope};

use super::session;
use crate::output::user_json;

/// Executes the login command.
///
/// Verifies the credentials and stores the user's ID in the local
/// session file.
///
/// # Arguments
///
/// * `email` - Login email
/// * `password` - Plaintext password
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if the credentials do not match any account.
pub fn execute(email: &str, password: &str, json: bool) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let user = login(&ctx, email, password)?;
    session::save(&ctx, &user.id)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({ "user": user_json(&user) }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Logged in as {} <{}>", user.username, user.email);
    }

    Ok(())
}
