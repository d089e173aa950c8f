// Rust guideline compliant 2026-08-18

//! Integration tests for the booking algorithm.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use souk_app::{
    book_listing, bookings_for_buyer, bookings_for_listing, create_listing, deposit,
    min_booking_date, register, top_up, ErrorCode, MarketContext,
};
use souk_core::{Listing, TransactionStatus, User};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Sets up a market with an owner, a funded buyer, and one listing
/// priced at 100.00 per night.
fn scenario() -> (TempDir, MarketContext, User, User, Listing) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = MarketContext::init(temp_dir.path()).expect("Failed to init market");

    let owner = register(&ctx, "alice", "a@test.com", "s3cret!pw").expect("register owner");
    let buyer = register(&ctx, "bob", "b@test.com", "s3cret!pw").expect("register buyer");

    let listing = create_listing(
        &ctx,
        &owner.id,
        "6 Bed 9 Bath",
        "Six bedrooms and nine baths on the waterfront",
        Decimal::new(10_000, 2),
        "1 Front Street",
    )
    .expect("create listing");

    deposit(&ctx, &buyer.id, Decimal::new(100_000, 2)).expect("deposit");
    top_up(&ctx, &buyer.id, Decimal::new(50_000, 2)).expect("top up");

    (temp_dir, ctx, owner, buyer, listing)
}

#[test]
fn test_owner_cannot_book_own_listing() {
    let (_guard, ctx, owner, _, listing) = scenario();

    let err = book_listing(
        &ctx,
        &owner.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 2),
    )
    .expect_err("self-booking should fail");

    assert_eq!(err.code(), ErrorCode::IntegrityError);
    assert_eq!(err.to_string(), "Owner and buyer are the same!");
}

#[test]
fn test_reversed_and_empty_ranges_fail() {
    let (_guard, ctx, owner, buyer, listing) = scenario();

    let err = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 2),
        date(2025, 1, 2),
    )
    .expect_err("empty range should fail");
    assert_eq!(err.to_string(), "Start date is same or after end date!");

    let err = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 3),
        date(2025, 1, 2),
    )
    .expect_err("reversed range should fail");
    assert_eq!(err.to_string(), "Start date is same or after end date!");
}

#[test]
fn test_unknown_parties_fail_with_role_names() {
    let (_guard, ctx, owner, buyer, listing) = scenario();

    let err = book_listing(
        &ctx,
        "usr-zzzzzz",
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 2),
    )
    .expect_err("unknown buyer should fail");
    assert_eq!(err.to_string(), "Invalid Buyer ID: usr-zzzzzz");

    let err = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        "lst-zzzzzz",
        date(2025, 1, 1),
        date(2025, 1, 2),
    )
    .expect_err("unknown listing should fail");
    assert_eq!(err.to_string(), "Invalid Listing ID: lst-zzzzzz");

    // A real user who does not own the listing is not its owner
    let err = book_listing(
        &ctx,
        &owner.id,
        &buyer.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 2),
    )
    .expect_err("wrong owner should fail");
    assert_eq!(err.to_string(), format!("Invalid Owner ID: {}", buyer.id));
}

#[test]
fn test_booking_requires_funded_wallet() {
    let (_guard, ctx, owner, buyer, listing) = scenario();

    // 10 nights at 100.00 exceeds the 500.00 wallet balance
    let err = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 11),
    )
    .expect_err("underfunded booking should fail");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.to_string(), "Buyer's balance is too low for this booking!");

    // A failed booking leaves the wallet untouched
    let stored = ctx.find_user(&buyer.id, "Buyer").expect("buyer stored");
    assert_eq!(stored.wallet.balance, Decimal::new(50_000, 2));
}

#[test]
fn test_successful_booking_debits_and_opens_transaction() {
    let (_guard, ctx, owner, buyer, listing) = scenario();

    let receipt = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 3),
    )
    .expect("booking should succeed");

    assert!(receipt.booking.id.starts_with("bkg-"));
    assert_eq!(receipt.booking.buyer_id, buyer.id);
    assert_eq!(receipt.booking.listing_id, listing.id);
    assert_eq!(receipt.booking.nights(), 2);
    assert_eq!(receipt.booking.total_cost, Decimal::new(20_000, 2));

    assert!(receipt.transaction.id.starts_with("txn-"));
    assert_eq!(receipt.transaction.payer_id, buyer.id);
    assert_eq!(receipt.transaction.payee_id, owner.id);
    assert_eq!(receipt.transaction.amount, Decimal::new(20_000, 2));
    assert_eq!(receipt.transaction.status, TransactionStatus::InProgress);

    let stored = ctx.find_user(&buyer.id, "Buyer").expect("buyer stored");
    assert_eq!(
        stored.wallet.balance,
        Decimal::new(30_000, 2),
        "two nights at 100.00 should be debited"
    );
}

#[test]
fn test_overlapping_ranges_are_rejected() {
    let (_guard, ctx, owner, buyer, listing) = scenario();

    book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 2),
    )
    .expect("first booking");

    let err = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 2),
    )
    .expect_err("identical range should fail");
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.to_string(), "Listing is already booked for those dates!");

    let err = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2024, 12, 30),
        date(2025, 1, 5),
    )
    .expect_err("enclosing range should fail");
    assert_eq!(err.to_string(), "Listing is already booked for those dates!");
}

#[test]
fn test_adjacent_ranges_do_not_overlap() {
    let (_guard, ctx, owner, buyer, listing) = scenario();

    book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 2),
    )
    .expect("first booking");

    // Ranges are half-open, so checkout day and next check-in coincide
    let receipt = book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 2),
        date(2025, 1, 3),
    )
    .expect("adjacent booking should succeed");
    assert_eq!(receipt.booking.start_date, date(2025, 1, 2));
}

#[test]
fn test_booking_queries_sort_by_start_date() {
    let (_guard, ctx, owner, buyer, listing) = scenario();

    book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 10),
        date(2025, 1, 12),
    )
    .expect("later booking");
    book_listing(
        &ctx,
        &buyer.id,
        &owner.id,
        &listing.id,
        date(2025, 1, 1),
        date(2025, 1, 3),
    )
    .expect("earlier booking");

    let for_listing = bookings_for_listing(&ctx, &listing.id).expect("listing query");
    assert_eq!(for_listing.len(), 2);
    assert_eq!(for_listing[0].start_date, date(2025, 1, 1));
    assert_eq!(for_listing[1].start_date, date(2025, 1, 10));

    let for_buyer = bookings_for_buyer(&ctx, &buyer.id).expect("buyer query");
    assert_eq!(for_buyer.len(), 2);
    assert_eq!(for_buyer[0].start_date, date(2025, 1, 1));

    let next = min_booking_date(&for_listing, &listing.id, date(2025, 1, 5));
    assert_eq!(next, date(2025, 1, 13), "day after the last checkout");
}
