// Rust guideline compliant 2026-08-18

//! The booking algorithm and booking query helpers.

use crate::error::Result;
use crate::ids::load_role;
use crate::market::MarketContext;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use souk_core::{Booking, Error as CoreError, Transaction};

/// Outcome of a successful booking: the persisted booking and the
/// in-progress transaction holding its funds.
#[derive(Debug, Clone, Serialize)]
pub struct BookingReceipt {
    /// The persisted booking.
    pub booking: Booking,
    /// The transaction opened for the booking amount.
    pub transaction: Transaction,
}

/// Books a listing for a buyer over `[start_date, end_date)`.
///
/// The whole operation runs under the bookings file lock, so two
/// processes cannot double-book the same dates. Checks run in a fixed
/// order: entity resolution, party rule, date order, funds, overlap.
/// On success the buyer's wallet is debited, the booking is persisted,
/// and an in-progress transaction holds the amount.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `buyer_id` - Full ID of the booking user
/// * `owner_id` - Full ID of the listing owner
/// * `listing_id` - Full ID of the listing
/// * `start_date` - First night, inclusive
/// * `end_date` - Checkout day, exclusive
///
/// # Returns
///
/// A receipt with the booking and its transaction.
///
/// # Errors
///
/// Returns an error if:
/// - Any ID references no entity, or the owner does not own the listing
/// - Buyer and owner are the same user
/// - The date range is empty or reversed
/// - The buyer's balance cannot cover the total cost
/// - The range overlaps an existing booking for the listing
pub fn book_listing(
    ctx: &MarketContext,
    buyer_id: &str,
    owner_id: &str,
    listing_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<BookingReceipt> {
    let users = ctx.users_store()?;
    let listings = ctx.listings_store()?;
    let bookings = ctx.bookings_store()?;
    let transactions = ctx.transactions_store()?;

    let receipt = bookings.with_lock(|| {
        let mut buyer = load_role(&users, buyer_id, "Buyer")?;
        let owner = load_role(&users, owner_id, "Owner")?;
        let listing = load_role(&listings, listing_id, "Listing")?;

        if listing.owner_id != owner.id {
            return Err(CoreError::UnknownId {
                role: "Owner",
                id: owner_id.to_string(),
            });
        }
        if buyer.id == owner.id {
            return Err(CoreError::SameParty);
        }
        if start_date >= end_date {
            return Err(CoreError::DateOrder);
        }

        let nights = (end_date - start_date).num_days();
        let total_cost = listing.price * Decimal::from(nights);
        if buyer.wallet.balance < total_cost {
            return Err(CoreError::InsufficientBalance);
        }

        let existing = bookings.load_all()?;
        if existing
            .iter()
            .filter(|b| b.listing_id == listing.id)
            .any(|b| b.overlaps(start_date, end_date))
        {
            return Err(CoreError::BookingOverlap);
        }

        let booking = Booking::new(
            buyer.id.clone(),
            listing.id.clone(),
            start_date,
            end_date,
            total_cost,
        )?;
        let transaction = Transaction::new(
            buyer.id.clone(),
            owner.id.clone(),
            listing.id.clone(),
            total_cost,
        )?;
        buyer.wallet.debit(total_cost)?;

        bookings.save(&booking)?;
        transactions.save(&transaction)?;
        users.save(&buyer)?;

        Ok(BookingReceipt {
            booking,
            transaction,
        })
    })?;
    Ok(receipt)
}

/// Computes the earliest date a new booking for a listing may start.
///
/// This is a date-picker hint, not an enforced rule: the overlap check
/// in [`book_listing`] is what actually rejects collisions.
///
/// # Arguments
///
/// * `bookings` - All bookings to consider
/// * `listing_id` - Listing being booked
/// * `today` - Current date
///
/// # Returns
///
/// Today, or the day after the last existing booking's end date,
/// whichever is later.
#[must_use]
pub fn min_booking_date(bookings: &[Booking], listing_id: &str, today: NaiveDate) -> NaiveDate {
    let last_end = bookings
        .iter()
        .filter(|b| b.listing_id == listing_id)
        .map(|b| b.end_date)
        .max();

    match last_end {
        Some(end) => end.succ_opt().unwrap_or(NaiveDate::MAX).max(today),
        None => today,
    }
}

/// Loads all bookings for a listing, earliest start first.
///
/// # Errors
///
/// Returns an error if the bookings file cannot be read.
pub fn bookings_for_listing(ctx: &MarketContext, listing_id: &str) -> Result<Vec<Booking>> {
    let mut bookings = ctx.find_bookings_by_listing(listing_id)?;
    bookings.sort_by(|a, b| a.start_date.cmp(&b.start_date));
    Ok(bookings)
}

/// Loads all bookings made by a buyer, earliest start first.
///
/// # Errors
///
/// Returns an error if the bookings file cannot be read.
pub fn bookings_for_buyer(ctx: &MarketContext, buyer_id: &str) -> Result<Vec<Booking>> {
    let mut bookings = ctx.bookings_store()?.load_all()?;
    bookings.retain(|b| b.buyer_id == buyer_id);
    bookings.sort_by(|a, b| a.start_date.cmp(&b.start_date));
    Ok(bookings)
}
