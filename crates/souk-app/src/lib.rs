// Rust guideline compliant 2026-08-18

//! Shared application services for Souk.
//!
//! This crate provides reusable, non-CLI-specific helpers for market
//! discovery, account and listing management, the booking algorithm,
//! wallet movements, transaction settlement, ID resolution, and
//! standardized response envelopes.

pub mod accounts;
pub mod booking;
pub mod error;
pub mod ids;
pub mod listings;
pub mod market;
pub mod response;
pub mod time;
pub mod transactions;
pub mod wallet;

pub use accounts::{
    login, register, update_billing_address, update_email, update_postal_code, update_profile,
    update_username, FieldOutcome, ProfileChanges, UpdateReport,
};
pub use booking::{
    book_listing, bookings_for_buyer, bookings_for_listing, min_booking_date, BookingReceipt,
};
pub use error::{AppError, ErrorCode, Result};
pub use ids::{resolve_booking_id, resolve_listing_id, resolve_transaction_id, resolve_user_id};
pub use listings::{create_listing, list_listings, update_listing, ListOptions, ListingChanges};
pub use market::MarketContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use time::{now, today};
pub use transactions::{
    cancel_transaction, set_transaction_status, settle_transaction, transactions_for_user,
};
pub use wallet::{balances, deposit, top_up, BalanceView};
