// Rust guideline compliant 2026-08-14

//! Error types for the Souk core library.

use thiserror::Error;

/// Result type alias for Souk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Souk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field value failed validation.
    #[error("Invalid {field}: {value}")]
    InvalidField {
        /// User-facing field name (e.g. "Title").
        field: &'static str,
        /// The rejected value, verbatim.
        value: String,
    },

    /// An entity reference does not resolve to a stored record.
    #[error("Invalid {role} ID: {id}")]
    UnknownId {
        /// Role the reference plays in the operation (e.g. "Buyer").
        role: &'static str,
        /// The unresolved identifier.
        id: String,
    },

    /// Record not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// A uniqueness or state conflict; the message is operation-specific.
    #[error("{0}")]
    Conflict(String),

    /// Booking rejected: buyer and owner are the same user.
    #[error("Owner and buyer are the same!")]
    SameParty,

    /// Booking rejected: the date range is empty or reversed.
    #[error("Start date is same or after end date!")]
    DateOrder,

    /// Booking rejected: the wallet balance cannot cover the total cost.
    #[error("Buyer's balance is too low for this booking!")]
    InsufficientBalance,

    /// Booking rejected: the range overlaps an existing booking.
    #[error("Listing is already booked for those dates!")]
    BookingOverlap,

    /// Transaction status string is not a recognized name or alias.
    #[error("Unknown transaction status: {0}")]
    StatusValue(String),

    /// Transaction status was given as a non-string value.
    #[error("Transaction status must be a string, got {0}")]
    StatusType(&'static str),

    /// Invalid state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Configuration file or value error.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
