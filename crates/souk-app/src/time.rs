// Rust guideline compliant 2026-08-18

//! Clock helpers for Souk.

use chrono::{DateTime, NaiveDate, Utc};

/// Returns the current UTC time.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Returns the current UTC calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
