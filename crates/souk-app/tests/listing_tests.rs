// Rust guideline compliant 2026-08-18

//! Integration tests for listing creation, updates, and queries.

use rust_decimal::Decimal;
use souk_app::{
    create_listing, list_listings, register, update_listing, ErrorCode, ListOptions,
    ListingChanges, MarketContext,
};
use tempfile::TempDir;

fn market() -> (TempDir, MarketContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = MarketContext::init(temp_dir.path()).expect("Failed to init market");
    (temp_dir, ctx)
}

const DESCRIPTION: &str = "Two bright rooms over the quay with a view of the harbor";

#[test]
fn test_create_listing_persists() {
    let (_guard, ctx) = market();
    let owner = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    let listing = create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "12 Quay Street",
    )
    .expect("creation should succeed");

    assert!(listing.id.starts_with("lst-"));
    assert_eq!(listing.owner_id, owner.id);

    let found = ctx
        .find_listing_by_title("Harbor loft")
        .expect("lookup should succeed")
        .expect("listing should be stored");
    assert_eq!(found.id, listing.id);
}

#[test]
fn test_create_listing_rejects_duplicate_title() {
    let (_guard, ctx) = market();
    let owner = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "",
    )
    .expect("first creation");

    let err = create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(12_000, 2),
        "",
    )
    .expect_err("duplicate title should fail");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.to_string(), "Title already in use: Harbor loft");
}

#[test]
fn test_create_listing_validates_fields_in_order() {
    let (_guard, ctx) = market();
    let owner = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    let err = create_listing(
        &ctx,
        &owner.id,
        "Bad title!",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "",
    )
    .expect_err("punctuated title should fail");
    assert_eq!(err.to_string(), "Invalid Title: Bad title!");

    let err = create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        "too short",
        Decimal::new(10_000, 2),
        "",
    )
    .expect_err("short description should fail");
    assert_eq!(err.to_string(), "Invalid Description: too short");

    let err = create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(999, 2),
        "",
    )
    .expect_err("price below the window should fail");
    assert_eq!(err.to_string(), "Invalid Price: 9.99");
}

#[test]
fn test_create_listing_requires_existing_owner() {
    let (_guard, ctx) = market();

    let err = create_listing(
        &ctx,
        "usr-zzzzzz",
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "",
    )
    .expect_err("unknown owner should fail");

    assert_eq!(err.code(), ErrorCode::IntegrityError);
    assert_eq!(err.to_string(), "Invalid Owner ID: usr-zzzzzz");
}

#[test]
fn test_description_must_outlast_title() {
    let (_guard, ctx) = market();
    let owner = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    // The description passes the length window but is shorter than
    // the title, so the longer-than-title rule rejects it
    let title = "Thirty character title padded";
    let description = "Twenty five characters aa";
    let err = create_listing(
        &ctx,
        &owner.id,
        title,
        description,
        Decimal::new(10_000, 2),
        "",
    )
    .expect_err("description not longer than title should fail");
    assert_eq!(err.to_string(), format!("Invalid Description: {}", description));
}

#[test]
fn test_update_listing_applies_fields_independently() {
    let (_guard, ctx) = market();
    let owner = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    let listing = create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "12 Quay Street",
    )
    .expect("creation");

    let changes = ListingChanges {
        title: Some("Harbor loft two".to_string()),
        price: Some(Decimal::new(9_000, 2)),
        address: Some("14 Quay Street".to_string()),
        ..ListingChanges::default()
    };
    let (updated, report) =
        update_listing(&ctx, &listing.id, &changes).expect("update should run");

    assert_eq!(report.applied, vec!["title", "address"]);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].field, "price");
    assert_eq!(report.rejected[0].error, "Invalid Price: 90.00");

    assert_eq!(updated.title, "Harbor loft two");
    assert_eq!(updated.price, Decimal::new(10_000, 2));
    assert_eq!(updated.address, "14 Quay Street");

    let stored = ctx.find_listing(&listing.id).expect("listing stored");
    assert_eq!(stored.title, "Harbor loft two");
    assert_eq!(stored.price, Decimal::new(10_000, 2));
}

#[test]
fn test_update_price_is_strictly_monotonic() {
    let (_guard, ctx) = market();
    let owner = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    let listing = create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "",
    )
    .expect("creation");

    let equal = ListingChanges {
        price: Some(Decimal::new(10_000, 2)),
        ..ListingChanges::default()
    };
    let (_, report) = update_listing(&ctx, &listing.id, &equal).expect("update runs");
    assert_eq!(report.rejected[0].field, "price");

    let higher = ListingChanges {
        price: Some(Decimal::new(11_000, 2)),
        ..ListingChanges::default()
    };
    let (updated, report) = update_listing(&ctx, &listing.id, &higher).expect("update runs");
    assert!(report.is_clean());
    assert_eq!(updated.price, Decimal::new(11_000, 2));
}

#[test]
fn test_update_listing_rejects_taken_title() {
    let (_guard, ctx) = market();
    let owner = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    create_listing(
        &ctx,
        &owner.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "",
    )
    .expect("first creation");
    let other = create_listing(
        &ctx,
        &owner.id,
        "Garden flat",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "",
    )
    .expect("second creation");

    let changes = ListingChanges {
        title: Some("Harbor loft".to_string()),
        ..ListingChanges::default()
    };
    let (updated, report) = update_listing(&ctx, &other.id, &changes).expect("update runs");

    assert_eq!(report.rejected[0].field, "title");
    assert_eq!(report.rejected[0].error, "Title already in use: Harbor loft");
    assert_eq!(updated.title, "Garden flat");
}

#[test]
fn test_list_listings_filters_persisted_records() {
    let (_guard, ctx) = market();
    let alice = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");
    let bob = register(&ctx, "bob", "bob@example.com", "s3cret!pw").expect("register");

    create_listing(
        &ctx,
        &alice.id,
        "Harbor loft",
        DESCRIPTION,
        Decimal::new(10_000, 2),
        "",
    )
    .expect("alice listing");
    create_listing(
        &ctx,
        &bob.id,
        "Garden flat",
        DESCRIPTION,
        Decimal::new(20_000, 2),
        "",
    )
    .expect("bob listing");

    let all = ctx
        .listings_store()
        .expect("store opens")
        .load_all()
        .expect("load");

    let options = ListOptions {
        owner: Some(alice.id.clone()),
        ..ListOptions::default()
    };
    let mine = list_listings(all.clone(), &options);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].title, "Harbor loft");

    let options = ListOptions {
        min_price: Some(Decimal::new(15_000, 2)),
        sort: Some("price".to_string()),
        ..ListOptions::default()
    };
    let pricey = list_listings(all, &options);
    assert_eq!(pricey.len(), 1);
    assert_eq!(pricey[0].title, "Garden flat");
}
