// Rust guideline compliant 2026-08-14

//! Logout command implementation.

use anyhow::Result;
use souk_app::MarketContext;

use super::session;

/// Executes the logout command.
///
/// # Errors
///
/// Returns an error if the session file cannot be removed.
pub fn execute() -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    if session::clear(&ctx)? {
        println!("✓ Logged out");
    } else {
        println!("No active session.");
    }
    Ok(())
}
