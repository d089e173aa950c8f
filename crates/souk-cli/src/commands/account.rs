// Rust guideline compliant 2026-08-14

//! Account update command implementation.

use anyhow::Result;
use serde_json::json;
use souk_app::{update_profile, MarketContext, ProfileChanges, SuccessEnvelope};

use super::session;
use crate::output::user_json;
use crate::terminal::print_warning;

/// Executes the account update command.
///
/// Each requested field is applied independently; invalid fields are
/// reported as warnings while the rest still persist.
///
/// # Arguments
///
/// * `username` - New username, if requested
/// * `email` - New email, if requested
/// * `billing_address` - New billing address, if requested
/// * `postal_code` - New postal code, if requested
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if no session is active or no changes were given.
pub fn update(
    username: Option<String>,
    email: Option<String>,
    billing_address: Option<String>,
    postal_code: Option<String>,
    json: bool,
) -> Result<()> {
    let changes = ProfileChanges {
        username,
        email,
        billing_address,
        postal_code,
    };
    if changes.is_empty() {
        anyhow::bail!("No changes requested. Pass at least one field to update.");
    }

    let ctx = MarketContext::discover(None)?;
    let user_id = session::require(&ctx)?;
    let (user, report) = update_profile(&ctx, &user_id, &changes)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({
            "user": user_json(&user),
            "report": report,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    for field in &report.applied {
        println!("✓ Updated {}", field);
    }
    for rejection in &report.rejected {
        print_warning(&format!("{}: {}", rejection.field, rejection.error));
    }

    Ok(())
}
