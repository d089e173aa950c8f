// Rust guideline compliant 2026-08-18

//! ID resolution helpers for Souk.

use crate::error::Result;
use souk_core::{identity, Booking, Error as CoreError, Listing, Record, Store, Transaction, User};

/// Loads a record by full ID, naming the given role on failure.
///
/// Useful inside storage lock closures, which deal in core errors.
///
/// # Errors
///
/// Returns an unknown-ID error naming `role` if no record has this ID.
pub(crate) fn load_role<T: Record>(
    store: &Store<T>,
    id: &str,
    role: &'static str,
) -> souk_core::Result<T> {
    match store.load_by_id(id) {
        Ok(record) => Ok(record),
        Err(CoreError::NotFound(_)) => Err(CoreError::UnknownId {
            role,
            id: id.to_string(),
        }),
        Err(e) => Err(e),
    }
}

/// Resolves a partial user ID to its canonical full ID.
///
/// # Arguments
///
/// * `partial` - Partial or full user ID
/// * `users` - Full list of users to match against
///
/// # Returns
///
/// The canonical user ID.
///
/// # Errors
///
/// Returns an error if the partial ID is ambiguous or not found.
pub fn resolve_user_id(partial: &str, users: &[User]) -> Result<String> {
    Ok(identity::resolve_partial_id(partial, users)?)
}

/// Resolves a partial listing ID to its canonical full ID.
///
/// # Errors
///
/// Returns an error if the partial ID is ambiguous or not found.
pub fn resolve_listing_id(partial: &str, listings: &[Listing]) -> Result<String> {
    Ok(identity::resolve_partial_id(partial, listings)?)
}

/// Resolves a partial booking ID to its canonical full ID.
///
/// # Errors
///
/// Returns an error if the partial ID is ambiguous or not found.
pub fn resolve_booking_id(partial: &str, bookings: &[Booking]) -> Result<String> {
    Ok(identity::resolve_partial_id(partial, bookings)?)
}

/// Resolves a partial transaction ID to its canonical full ID.
///
/// # Errors
///
/// Returns an error if the partial ID is ambiguous or not found.
pub fn resolve_transaction_id(partial: &str, transactions: &[Transaction]) -> Result<String> {
    Ok(identity::resolve_partial_id(partial, transactions)?)
}
