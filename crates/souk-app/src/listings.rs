// Rust guideline compliant 2026-08-18

//! Listing creation, updates, and query helpers.

use crate::accounts::UpdateReport;
use crate::error::Result;
use crate::market::MarketContext;
use rayon::prelude::*;
use rust_decimal::Decimal;
use souk_core::{validation, Error as CoreError, Listing};

/// Requested listing field changes. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ListingChanges {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New nightly price.
    pub price: Option<Decimal>,
    /// New street address.
    pub address: Option<String>,
}

impl ListingChanges {
    /// Returns true when no field change was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.address.is_none()
    }
}

/// Query options for filtering and sorting listings.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by owner ID.
    pub owner: Option<String>,
    /// Filter by price >= bound.
    pub min_price: Option<Decimal>,
    /// Filter by price <= bound.
    pub max_price: Option<Decimal>,
    /// Sort field override.
    pub sort: Option<String>,
}

/// Creates a new listing for an existing owner.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `owner_id` - Full ID of the owning user
/// * `title` - Listing title, unique across the market
/// * `description` - Detailed description
/// * `price` - Nightly price
/// * `address` - Street address
///
/// # Returns
///
/// The persisted listing.
///
/// # Errors
///
/// Returns a validation error for a malformed field, a conflict error
/// for a duplicate title, or an unknown-ID error for a missing owner.
pub fn create_listing(
    ctx: &MarketContext,
    owner_id: &str,
    title: &str,
    description: &str,
    price: Decimal,
    address: &str,
) -> Result<Listing> {
    let listings = ctx.listings_store()?;
    let users = ctx.users_store()?;

    let listing = listings.with_lock(|| {
        if !validation::valid_title(title) {
            return Err(CoreError::InvalidField {
                field: "Title",
                value: title.to_string(),
            });
        }

        let existing = listings.load_all()?;
        if existing.iter().any(|l| l.title == title) {
            return Err(CoreError::Conflict(format!("Title already in use: {}", title)));
        }

        if !validation::valid_description(description, title) {
            return Err(CoreError::InvalidField {
                field: "Description",
                value: description.to_string(),
            });
        }
        if !validation::valid_price(price) {
            return Err(CoreError::InvalidField {
                field: "Price",
                value: price.to_string(),
            });
        }

        match users.load_by_id(owner_id) {
            Ok(_) => {}
            Err(CoreError::NotFound(_)) => {
                return Err(CoreError::UnknownId {
                    role: "Owner",
                    id: owner_id.to_string(),
                })
            }
            Err(e) => return Err(e),
        }

        let listing = Listing::new(
            title.to_string(),
            description.to_string(),
            price,
            address.to_string(),
            owner_id.to_string(),
        )?;
        listings.save(&listing)?;
        Ok(listing)
    })?;
    Ok(listing)
}

/// Applies a batch of listing changes, each field independently.
///
/// Valid fields are applied and persisted in a single save; invalid
/// fields are reported without blocking the rest. The nightly price
/// only ever moves upward.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `listing_id` - Full ID of the listing to update
/// * `changes` - Requested field changes
///
/// # Returns
///
/// The listing after the update and a per-field report.
///
/// # Errors
///
/// Returns an unknown-ID error if no listing has the ID. Individual
/// field failures are reported, not returned.
pub fn update_listing(
    ctx: &MarketContext,
    listing_id: &str,
    changes: &ListingChanges,
) -> Result<(Listing, UpdateReport)> {
    let store = ctx.listings_store()?;
    let outcome = store.with_lock(|| {
        let mut listings = store.load_all()?;
        let pos = listings
            .iter()
            .position(|l| l.id == listing_id)
            .ok_or_else(|| CoreError::UnknownId {
                role: "Listing",
                id: listing_id.to_string(),
            })?;

        let mut listing = listings[pos].clone();
        let mut report = UpdateReport::default();

        if let Some(title) = &changes.title {
            if listings.iter().any(|l| l.title == *title && l.id != listing_id) {
                report.reject("title", format!("Title already in use: {}", title));
            } else {
                report.record("title", listing.set_title(title));
            }
        }

        if let Some(description) = &changes.description {
            report.record("description", listing.set_description(description));
        }

        if let Some(price) = changes.price {
            report.record("price", listing.set_price(price));
        }

        if let Some(address) = &changes.address {
            report.record("address", listing.set_address(address));
        }

        if !report.applied.is_empty() {
            listings[pos] = listing.clone();
            store.save_all(&listings)?;
        }

        Ok((listing, report))
    })?;
    Ok(outcome)
}

/// Filters and sorts a list of listings based on `ListOptions`.
///
/// # Arguments
///
/// * `listings` - Listings to filter and sort
/// * `options` - Query options
///
/// # Returns
///
/// The filtered and sorted listings.
pub fn list_listings(mut listings: Vec<Listing>, options: &ListOptions) -> Vec<Listing> {
    listings = apply_filters(listings, options);

    if let Some(field) = &options.sort {
        sort_listings(&mut listings, field);
    } else {
        listings.sort_by(|a, b| b.last_modified_at.cmp(&a.last_modified_at));
    }

    listings
}

fn apply_filters(listings: Vec<Listing>, options: &ListOptions) -> Vec<Listing> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |l: &Listing| {
        if let Some(ref owner) = options.owner {
            if l.owner_id != *owner {
                return false;
            }
        }

        if let Some(min) = options.min_price {
            if l.price < min {
                return false;
            }
        }
        if let Some(max) = options.max_price {
            if l.price > max {
                return false;
            }
        }

        true
    };

    if listings.len() >= PARALLEL_THRESHOLD {
        listings.into_par_iter().filter(|l| predicate(l)).collect()
    } else {
        listings.into_iter().filter(predicate).collect()
    }
}

fn sort_listings(listings: &mut [Listing], field: &str) {
    match field {
        "id" => listings.sort_by(|a, b| a.id.cmp(&b.id)),
        "title" => listings.sort_by(|a, b| a.title.cmp(&b.title)),
        "price" => listings.sort_by(|a, b| a.price.cmp(&b.price)),
        "created_at" => listings.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        "last_modified_at" => {
            listings.sort_by(|a, b| a.last_modified_at.cmp(&b.last_modified_at))
        }
        _ => listings.sort_by(|a, b| b.last_modified_at.cmp(&a.last_modified_at)),
    }
}
