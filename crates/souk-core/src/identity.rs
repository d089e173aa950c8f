// Rust guideline compliant 2026-08-14

//! Hash-based identifiers and password digests.
//!
//! Every entity gets a short content-derived ID with a kind prefix
//! (`usr-`, `lst-`, `bkg-`, `txn-`) followed by 6 to 8 lowercase hex
//! digits. Passwords are stored only as salted SHA-256 digests in the
//! form `sha256$<salt-hex>$<digest-hex>`.

use crate::storage::Record;
use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Entity kinds that receive hash-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A registered user (`usr-`).
    User,
    /// A bookable listing (`lst-`).
    Listing,
    /// A date-ranged booking (`bkg-`).
    Booking,
    /// A funds-holding transaction (`txn-`).
    Transaction,
}

impl EntityKind {
    /// Returns the ID prefix for this entity kind.
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::User => "usr",
            EntityKind::Listing => "lst",
            EntityKind::Booking => "bkg",
            EntityKind::Transaction => "txn",
        }
    }
}

/// Generates a hash-based ID for an entity.
///
/// # Arguments
///
/// * `kind` - The entity kind, which determines the prefix
/// * `seed` - Creation-time content (email, title, or a composite)
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Collision counter, bumped by callers on conflict
///
/// # Returns
///
/// An ID in the form `<prefix>-<6 hex digits>`.
pub fn generate_id(kind: EntityKind, seed: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(kind.prefix().as_bytes());
    hasher.update(seed.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}-{}", kind.prefix(), &hex[..6])
}

/// Validates the format of an entity ID.
///
/// # Arguments
///
/// * `kind` - The expected entity kind
/// * `id` - The ID to validate
///
/// # Returns
///
/// Ok if the ID has the expected prefix and 6 to 8 lowercase hex digits.
///
/// # Errors
///
/// Returns a validation error describing the malformed ID.
pub fn validate_id_format(kind: EntityKind, id: &str) -> Result<()> {
    let suffix = id
        .strip_prefix(kind.prefix())
        .and_then(|rest| rest.strip_prefix('-'));

    let valid = match suffix {
        Some(hex) => {
            (6..=8).contains(&hex.len())
                && hex
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        }
        None => false,
    };

    if !valid {
        return Err(Error::InvalidField {
            field: "ID",
            value: id.to_string(),
        });
    }

    Ok(())
}

/// Resolves a partial ID to the canonical full ID of a stored record.
///
/// An exact match always wins; otherwise the partial must be the prefix
/// of exactly one record ID.
///
/// # Arguments
///
/// * `partial` - Partial or full entity ID
/// * `records` - Records to match against
///
/// # Returns
///
/// The canonical full ID.
///
/// # Errors
///
/// Returns an error if the partial ID matches no record or more than one.
pub fn resolve_partial_id<T: Record>(partial: &str, records: &[T]) -> Result<String> {
    if records.iter().any(|record| record.id() == partial) {
        return Ok(partial.to_string());
    }

    let matches: Vec<String> = records
        .iter()
        .map(Record::id)
        .filter(|id| id.starts_with(partial))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => Err(Error::NotFound(partial.to_string())),
        1 => Ok(matches.into_iter().next().unwrap_or_default()),
        _ => Err(Error::AmbiguousId(partial.to_string(), matches)),
    }
}

/// Derives a salted SHA-256 digest for password storage.
///
/// # Arguments
///
/// * `password` - The plaintext password, which is never stored
///
/// # Returns
///
/// A digest string in the form `sha256$<salt-hex>$<digest-hex>`.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    format!("sha256${}${}", hex_encode(&salt), digest_hex(password, &salt))
}

/// Verifies a plaintext password against a stored digest.
///
/// Unparseable digests verify as false rather than erroring, so a
/// corrupted record cannot be logged into.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("sha256"), Some(salt_hex), Some(digest), None) => match hex_decode(salt_hex) {
            Some(salt) => digest_hex(password, &salt) == digest,
            None => false,
        },
        _ => false,
    }
}

fn digest_hex(password: &str, salt: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}
