// Rust guideline compliant 2026-08-14

//! Book command implementation.

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;
use souk_app::{book_listing, resolve_listing_id, MarketContext, SuccessEnvelope};

use super::session;

fn parse_date(raw: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => anyhow::bail!("Invalid date: {} (expected YYYY-MM-DD)", raw),
    }
}

/// Executes the book command.
///
/// Books the listing for the logged-in user over `[start, end)`. The
/// checkout day is exclusive, so back-to-back stays can share it.
///
/// # Arguments
///
/// * `listing` - Full or partial listing ID
/// * `start` - First night in YYYY-MM-DD form
/// * `end` - Checkout day in YYYY-MM-DD form
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if no session is active, a date is malformed, or
/// the booking is rejected.
pub fn execute(listing: &str, start: &str, end: &str, json: bool) -> Result<()> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;

    let ctx = MarketContext::discover(None)?;
    let buyer_id = session::require(&ctx)?;

    let listings = ctx.listings_store()?.load_all()?;
    let listing_id = resolve_listing_id(listing, &listings)?;
    let owner_id = ctx.find_listing(&listing_id)?.owner_id;

    let receipt = book_listing(&ctx, &buyer_id, &owner_id, &listing_id, start_date, end_date)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({
            "booking": receipt.booking,
            "transaction": receipt.transaction,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!(
            "Booking Successful: {} to {}",
            receipt.booking.start_date, receipt.booking.end_date
        );
        println!("  Booking: {}", receipt.booking.id);
        println!("  Total: {}", receipt.booking.total_cost);
        println!("  Transaction: {}", receipt.transaction.id);
    }

    Ok(())
}
