// Rust guideline compliant 2026-08-14

//! Whoami command implementation.

use anyhow::Result;
use souk_app::MarketContext;

use super::session;
use crate::output::OutputFormatter;

/// Executes the whoami command.
///
/// # Arguments
///
/// * `formatter` - Output formatter to use
///
/// # Errors
///
/// Returns an error if no session is active or the user record is gone.
pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let user_id = session::require(&ctx)?;
    let user = ctx.find_user(&user_id, "User")?;
    print!("{}", formatter.format_user(&user));
    Ok(())
}
