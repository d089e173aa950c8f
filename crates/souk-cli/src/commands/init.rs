// Rust guideline compliant 2026-08-14

//! Init command implementation.

use anyhow::Result;
use souk_app::MarketContext;
use std::path::Path;

/// Executes the init command.
///
/// Creates the `.souk` market directory with empty record files and a
/// default configuration. Safe to run in an already-initialized
/// directory.
///
/// # Errors
///
/// Returns an error if the market directory cannot be created.
pub fn execute() -> Result<()> {
    let ctx = MarketContext::init(Path::new("."))?;

    println!("✓ Souk market initialized at .souk/");
    println!("  Created: {}", ctx.users_path().display());
    println!("  Created: {}", ctx.listings_path().display());
    println!("  Created: {}", ctx.bookings_path().display());
    println!("  Created: {}", ctx.transactions_path().display());
    println!("  Created: {}", ctx.config_path().display());
    println!();
    println!("Next: register an account with 'souk register'");

    Ok(())
}
