// Rust guideline compliant 2026-08-14

//! Bookings command implementation.

use anyhow::Result;
use chrono::NaiveDate;
use souk_app::{
    bookings_for_buyer, bookings_for_listing, min_booking_date, resolve_listing_id,
    MarketContext,
};

use super::session;
use crate::output::OutputFormatter;

/// Executes the bookings command.
///
/// With `--listing`, shows that listing's bookings and the earliest
/// available start date. Otherwise shows the logged-in user's bookings.
///
/// # Arguments
///
/// * `listing` - Full or partial listing ID, if filtering by listing
/// * `formatter` - Output formatter to use
///
/// # Errors
///
/// Returns an error if the ID matches no listing, or no session is
/// active when listing the user's own bookings.
pub fn execute(listing: Option<String>, formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = MarketContext::discover(None)?;

    let bookings = match listing {
        Some(partial) => {
            let all = ctx.listings_store()?.load_all()?;
            let listing_id = resolve_listing_id(&partial, &all)?;
            let bookings = bookings_for_listing(&ctx, &listing_id)?;
            print_next_available(&ctx, &listing_id, souk_app::today())?;
            bookings
        }
        None => {
            let buyer_id = session::require(&ctx)?;
            bookings_for_buyer(&ctx, &buyer_id)?
        }
    };

    print!("{}", formatter.format_booking_list(&bookings));
    Ok(())
}

fn print_next_available(ctx: &MarketContext, listing_id: &str, today: NaiveDate) -> Result<()> {
    let all = ctx.bookings_store()?.load_all()?;
    let next = min_booking_date(&all, listing_id, today);
    eprintln!("Next available start date: {}", next);
    Ok(())
}
