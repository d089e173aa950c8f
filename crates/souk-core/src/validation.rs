// Rust guideline compliant 2026-08-14

//! Field validators for marketplace data.
//!
//! Pure predicates shared by the model setters and the pre-check paths.
//! Every rule here is strictly tighter than the storage column limits
//! (username 20, email 320, postal code 7, title 255, description 5000),
//! so a value that validates always fits the store.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 80;
/// Minimum description length in characters.
pub const DESCRIPTION_MIN_LEN: usize = 20;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 2000;
/// Minimum username length in characters.
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length in characters.
pub const USERNAME_MAX_LEN: usize = 19;
/// Maximum email length (storage boundary).
pub const EMAIL_MAX_LEN: usize = 320;
/// Minimum password length in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Dot-atom email pattern: no leading, trailing, or consecutive dots in the
/// local part; domain labels never begin or end with a hyphen.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("Invalid email regex pattern")
});

/// Canadian postal code: letter-digit alternation, uppercase, no space.
/// The first letter excludes D, F, I, O, Q, U, W, Z; the third and fifth
/// exclude D, F, I, O, Q, U.
static POSTAL_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z][0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
        .expect("Invalid postal code regex pattern")
});

/// Checks a listing title.
///
/// Titles are 1 to 80 characters of ASCII alphanumerics and spaces, with
/// no leading or trailing space.
pub fn valid_title(title: &str) -> bool {
    let len = title.chars().count();
    if len == 0 || len > TITLE_MAX_LEN {
        return false;
    }
    if title.starts_with(' ') || title.ends_with(' ') {
        return false;
    }
    title.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Checks a listing description against its title.
///
/// Descriptions are 20 to 2000 characters with no character-set
/// restriction, and must be strictly longer than the title.
pub fn valid_description(description: &str, title: &str) -> bool {
    let len = description.chars().count();
    (DESCRIPTION_MIN_LEN..=DESCRIPTION_MAX_LEN).contains(&len) && title.chars().count() < len
}

/// Checks a nightly price against the accepted window, both ends inclusive.
pub fn valid_price(price: Decimal) -> bool {
    min_price() <= price && price <= max_price()
}

/// Lowest accepted nightly price (10.00).
pub fn min_price() -> Decimal {
    Decimal::new(1_000, 2)
}

/// Highest accepted nightly price (10000.00).
pub fn max_price() -> Decimal {
    Decimal::new(1_000_000, 2)
}

/// Checks a listing date against the accepted window, both ends exclusive.
pub fn valid_date(date: NaiveDate) -> bool {
    earliest_date() < date && date < latest_date()
}

/// Lower boundary of the date window; valid dates are strictly after it.
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 2).expect("Invalid date window boundary")
}

/// Upper boundary of the date window; valid dates are strictly before it.
pub fn latest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 2).expect("Invalid date window boundary")
}

/// Checks a login email address.
///
/// Accepts dot-atom addresses up to 320 characters.
pub fn valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && EMAIL_PATTERN.is_match(email)
}

/// Checks a display username.
///
/// Usernames are 3 to 19 characters of ASCII alphanumerics and spaces,
/// with no leading or trailing space.
pub fn valid_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return false;
    }
    if username.starts_with(' ') || username.ends_with(' ') {
        return false;
    }
    username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Checks a Canadian postal code in its six-character form.
pub fn valid_postal_code(code: &str) -> bool {
    POSTAL_CODE_PATTERN.is_match(code)
}

/// Checks password complexity.
///
/// Passwords are at least 6 characters and carry at least one ASCII
/// letter, one ASCII digit, and one character that is neither.
pub fn valid_password(password: &str) -> bool {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return false;
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());
    has_letter && has_digit && has_symbol
}
