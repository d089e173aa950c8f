// Rust guideline compliant 2026-08-14

//! Listing command implementations.

use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;
use souk_app::{
    create_listing, list_listings, min_booking_date, resolve_listing_id, resolve_user_id,
    update_listing, ListOptions, ListingChanges, MarketContext, SuccessEnvelope,
};

use super::session;
use crate::output::OutputFormatter;
use crate::terminal::print_warning;

fn parse_price(raw: &str) -> Result<Decimal> {
    match raw.parse::<Decimal>() {
        Ok(price) => Ok(price),
        Err(_) => anyhow::bail!("Invalid price: {} (expected a decimal number)", raw),
    }
}

/// Executes the listing create command.
///
/// The logged-in user becomes the owner.
///
/// # Arguments
///
/// * `title` - Listing title, unique across the market
/// * `description` - Detailed description
/// * `price` - Nightly price as a decimal string
/// * `address` - Street address
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if no session is active, a field is malformed, or
/// the title is taken.
pub fn create(
    title: &str,
    description: &str,
    price: &str,
    address: Option<String>,
    json: bool,
) -> Result<()> {
    let price = parse_price(price)?;
    let ctx = MarketContext::discover(None)?;
    let owner_id = session::require(&ctx)?;

    let listing = create_listing(
        &ctx,
        &owner_id,
        title,
        description,
        price,
        address.as_deref().unwrap_or(""),
    )?;

    if json {
        let envelope = SuccessEnvelope::new(json!({ "listing": listing }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("✓ Created listing: {}", listing.title);
        println!("  ID: {}", listing.id);
        println!("  Price: {} per night", listing.price);
    }

    Ok(())
}

/// Executes the listing update command.
///
/// Each requested field is applied independently; invalid fields are
/// reported as warnings while the rest still persist.
///
/// # Arguments
///
/// * `id` - Full or partial listing ID
/// * `title` - New title, if requested
/// * `description` - New description, if requested
/// * `price` - New nightly price, if requested
/// * `address` - New address, if requested
/// * `json` - Whether to emit JSON output
///
/// # Errors
///
/// Returns an error if the ID matches no listing or no changes were
/// given.
pub fn update(
    id: &str,
    title: Option<String>,
    description: Option<String>,
    price: Option<String>,
    address: Option<String>,
    json: bool,
) -> Result<()> {
    let price = match price {
        Some(raw) => Some(parse_price(&raw)?),
        None => None,
    };
    let changes = ListingChanges {
        title,
        description,
        price,
        address,
    };
    if changes.is_empty() {
        anyhow::bail!("No changes requested. Pass at least one field to update.");
    }

    let ctx = MarketContext::discover(None)?;
    let listings = ctx.listings_store()?.load_all()?;
    let listing_id = resolve_listing_id(id, &listings)?;
    let (listing, report) = update_listing(&ctx, &listing_id, &changes)?;

    if json {
        let envelope = SuccessEnvelope::new(json!({
            "listing": listing,
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

/// Executes the listing list command.
///
/// # Arguments
///
/// * `owner` - Filter by owner ID, full or partial, or `me` for the session user
/// * `min_price` - Filter by price >= bound
/// * `max_price` - Filter by price <= bound
/// * `sort` - Sort field override
/// * `limit` - Maximum number of rows to show
/// * `formatter` - Output formatter to use
///
/// # Errors
///
/// Returns an error if a filter is malformed or the store fails.
pub fn list(
    owner: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    sort: Option<String>,
    limit: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let ctx = MarketContext::discover(None)?;

    let owner = match owner.as_deref() {
        Some("me") => Some(session::require(&ctx)?),
        Some(partial) => {
            let users = ctx.users_store()?.load_all()?;
            Some(resolve_user_id(partial, &users)?)
        }
        None => None,
    };
    let min_price = match min_price {
        Some(raw) => Some(parse_price(&raw)?),
        None => None,
    };
    let max_price = match max_price {
        Some(raw) => Some(parse_price(&raw)?),
        None => None,
    };

    let options = ListOptions {
        owner,
        min_price,
        max_price,
        sort,
    };
    let all = ctx.listings_store()?.load_all()?;
    let mut listings = list_listings(all, &options);
    if let Some(limit) = limit {
        listings.truncate(limit);
    }

    print!("{}", formatter.format_listing_list(&listings));
    Ok(())
}

/// Executes the listing show command.
///
/// Prints the listing, plus the earliest available start date on stderr.
///
/// # Arguments
///
/// * `id` - Full or partial listing ID
/// * `formatter` - Output formatter to use
///
/// # Errors
///
/// Returns an error if the ID matches no listing or is ambiguous.
pub fn show(id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let ctx = MarketContext::discover(None)?;
    let listings = ctx.listings_store()?.load_all()?;
    let listing_id = resolve_listing_id(id, &listings)?;
    let listing = ctx.find_listing(&listing_id)?;
    print!("{}", formatter.format_listing(&listing));

    let bookings = ctx.bookings_store()?.load_all()?;
    let next = min_booking_date(&bookings, &listing_id, souk_app::today());
    eprintln!("Next available start date: {}", next);
    Ok(())
}
