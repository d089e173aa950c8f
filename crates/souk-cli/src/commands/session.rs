// Rust guideline compliant 2026-08-14

//! Local session file helpers for the Souk CLI.
//!
//! The session is a `session.json` file in the market directory holding
//! the logged-in user's ID. It is a single-machine convenience, not an
//! authentication transport.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use souk_app::MarketContext;

#[derive(Debug, Serialize, Deserialize)]
struct Session {
    user_id: String,
}

/// Writes the session file for a logged-in user.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `user_id` - Full ID of the logged-in user
///
/// # Errors
///
/// Returns an error if the session file cannot be written.
pub fn save(ctx: &MarketContext, user_id: &str) -> Result<()> {
    let session = Session {
        user_id: user_id.to_string(),
    };
    std::fs::write(ctx.session_path(), serde_json::to_string_pretty(&session)?)?;
    Ok(())
}

/// Reads the logged-in user ID from the session file, if any.
///
/// # Errors
///
/// Returns an error if the session file exists but cannot be parsed.
pub fn load(ctx: &MarketContext) -> Result<Option<String>> {
    let path = ctx.session_path();
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let session: Session = serde_json::from_str(&content)?;
    Ok(Some(session.user_id))
}

/// Removes the session file.
///
/// # Returns
///
/// `true` if a session existed and was removed, `false` otherwise.
///
/// # Errors
///
/// Returns an error if the session file cannot be removed.
pub fn clear(ctx: &MarketContext) -> Result<bool> {
    let path = ctx.session_path();
    if path.exists() {
        std::fs::remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}

/// Returns the logged-in user ID or fails with a login hint.
///
/// # Errors
///
/// Returns an error if no session is active.
pub fn require(ctx: &MarketContext) -> Result<String> {
    match load(ctx)? {
        Some(user_id) => Ok(user_id),
        None => anyhow::bail!("Not logged in. Run 'souk login' first."),
    }
}
