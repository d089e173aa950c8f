// Rust guideline compliant 2026-08-14

//! Property-based tests for the identity module.
//!
//! These tests validate universal properties for hash-based ID
//! generation, validation, partial ID resolution, and password digests.

use proptest::prelude::*;
use souk_core::identity::{
    generate_id, hash_password, resolve_partial_id, validate_id_format, verify_password,
    EntityKind,
};
use souk_core::User;

/// Generates arbitrary ID seeds.
fn arb_seed() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@.: ]{1,100}").unwrap()
}

/// Generates arbitrary valid timestamps.
fn arb_timestamp() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000_000i64
}

/// Generates arbitrary entity kinds.
fn arb_kind() -> impl Strategy<Value = EntityKind> {
    prop_oneof![
        Just(EntityKind::User),
        Just(EntityKind::Listing),
        Just(EntityKind::Booking),
        Just(EntityKind::Transaction),
    ]
}

fn user_with_id(id: &str) -> User {
    let mut user = User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "s3cret!pw",
    )
    .expect("sample user should validate");
    user.id = id.to_string();
    user
}

proptest! {
    /// **Property: ID format consistency**
    ///
    /// Every generated ID carries its kind's prefix followed by 6 to 8
    /// lowercase hex digits, and passes its own format validator.
    #[test]
    fn test_id_format_consistency(
        kind in arb_kind(),
        seed in arb_seed(),
        timestamp in arb_timestamp(),
        nonce in any::<u32>()
    ) {
        let id = generate_id(kind, &seed, timestamp, nonce);

        let expected_prefix = format!("{}-", kind.prefix());
        prop_assert!(id.starts_with(&expected_prefix), "ID must start with '{}'", expected_prefix);

        let hash_part = &id[expected_prefix.len()..];
        prop_assert!(
            hash_part.len() >= 6 && hash_part.len() <= 8,
            "Hash part must be 6-8 characters, got {}",
            hash_part.len()
        );
        prop_assert!(
            hash_part.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "Hash part must contain only lowercase hexadecimal characters"
        );

        prop_assert!(
            validate_id_format(kind, &id).is_ok(),
            "Generated ID should pass validation"
        );
    }

    /// **Property: ID generation determinism**
    ///
    /// The same (kind, seed, timestamp, nonce) tuple always produces the
    /// same ID.
    #[test]
    fn test_id_generation_determinism(
        kind in arb_kind(),
        seed in arb_seed(),
        timestamp in arb_timestamp(),
        nonce in any::<u32>()
    ) {
        let id1 = generate_id(kind, &seed, timestamp, nonce);
        let id2 = generate_id(kind, &seed, timestamp, nonce);
        prop_assert_eq!(id1, id2, "Same inputs should produce identical IDs");
    }

    /// **Property: nonce changes the ID**
    ///
    /// Bumping the nonce on otherwise identical inputs produces a
    /// different ID, so collision retries actually move.
    #[test]
    fn test_nonce_changes_id(
        kind in arb_kind(),
        seed in arb_seed(),
        timestamp in arb_timestamp(),
        nonce in 0u32..u32::MAX
    ) {
        let id1 = generate_id(kind, &seed, timestamp, nonce);
        let id2 = generate_id(kind, &seed, timestamp, nonce + 1);
        prop_assert_ne!(id1, id2, "Nonce bump should change the ID");
    }

    /// **Property: kind validation is exclusive**
    ///
    /// An ID generated for one kind never validates as another kind.
    #[test]
    fn test_kind_validation_exclusive(
        seed in arb_seed(),
        timestamp in arb_timestamp(),
    ) {
        let id = generate_id(EntityKind::User, &seed, timestamp, 0);
        prop_assert!(validate_id_format(EntityKind::User, &id).is_ok());
        prop_assert!(validate_id_format(EntityKind::Listing, &id).is_err());
        prop_assert!(validate_id_format(EntityKind::Booking, &id).is_err());
        prop_assert!(validate_id_format(EntityKind::Transaction, &id).is_err());
    }

    /// **Property: unique-prefix resolution**
    ///
    /// With a single record, every prefix of its ID resolves to the full
    /// ID.
    #[test]
    fn test_partial_id_resolution_uniqueness(
        seed in arb_seed(),
        timestamp in arb_timestamp(),
    ) {
        let full_id = generate_id(EntityKind::User, &seed, timestamp, 0);
        let users = vec![user_with_id(&full_id)];

        for len in 3..=full_id.len() {
            let partial = &full_id[..len];
            let resolved = resolve_partial_id(partial, &users);
            prop_assert!(resolved.is_ok(), "Resolution should succeed for unique match");
            prop_assert_eq!(
                &resolved.expect("checked above"),
                &full_id,
                "Resolved ID should match the record's full ID"
            );
        }
    }

    /// **Property: password digests verify their own password**
    ///
    /// Hashing any password produces a digest that verifies that password
    /// and is never the plaintext itself.
    #[test]
    fn test_password_digest_round_trip(password in "[ -~]{1,40}") {
        let digest = hash_password(&password);
        prop_assert!(verify_password(&password, &digest));
        prop_assert!(digest.starts_with("sha256$"), "Digest should carry scheme prefix");
        prop_assert_ne!(&digest, &password, "Digest must not equal the plaintext");
    }

    /// **Property: wrong passwords never verify**
    #[test]
    fn test_wrong_password_fails(
        password in "[a-z]{6,20}",
        other in "[A-Z]{6,20}",
    ) {
        let digest = hash_password(&password);
        prop_assert!(!verify_password(&other, &digest));
    }
}

/// Ambiguous prefixes are rejected with every candidate listed.
#[test]
fn test_partial_id_ambiguity_detection() {
    let users = vec![
        user_with_id("usr-aaa111"),
        user_with_id("usr-aaa222"),
        user_with_id("usr-bbb333"),
    ];

    let result = resolve_partial_id("usr-aaa", &users);
    assert!(result.is_err(), "Resolution should fail for ambiguous prefix");

    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("Ambiguous ID"), "Error should indicate ambiguity");
    assert!(err_msg.contains("usr-aaa111"), "Error should list candidates");
    assert!(err_msg.contains("usr-aaa222"), "Error should list candidates");
    assert!(!err_msg.contains("usr-bbb333"), "Non-matches are not candidates");
}

/// An exact match wins even when it is also a prefix of other IDs.
#[test]
fn test_exact_match_beats_prefix_matches() {
    let users = vec![user_with_id("usr-aaaaaa"), user_with_id("usr-aaaaaa11")];
    let resolved = resolve_partial_id("usr-aaaaaa", &users).expect("exact match should win");
    assert_eq!(resolved, "usr-aaaaaa");
}

/// Unmatched partials report not-found with the partial preserved.
#[test]
fn test_partial_id_no_matches() {
    let users = vec![user_with_id("usr-aaa111")];
    let result = resolve_partial_id("xyz", &users);
    assert!(result.is_err(), "Should fail when no matches found");

    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("Not found"), "Error should indicate not found");
    assert!(err_msg.contains("xyz"), "Error should preserve the partial");
}

/// validate_id_format accepts exactly the documented shape.
#[test]
fn test_validate_id_format_correctness() {
    // Valid IDs
    assert!(validate_id_format(EntityKind::User, "usr-abc123").is_ok());
    assert!(validate_id_format(EntityKind::Listing, "lst-123456").is_ok());
    assert!(validate_id_format(EntityKind::Booking, "bkg-abcdef").is_ok());
    assert!(validate_id_format(EntityKind::Transaction, "txn-12345678").is_ok());

    // Wrong prefix
    assert!(validate_id_format(EntityKind::User, "user-abc123").is_err());
    assert!(validate_id_format(EntityKind::User, "abc123").is_err());
    assert!(validate_id_format(EntityKind::User, "lst-abc123").is_err());

    // Wrong length
    assert!(validate_id_format(EntityKind::User, "usr-12345").is_err());
    assert!(validate_id_format(EntityKind::User, "usr-123456789").is_err());

    // Non-hex characters
    assert!(validate_id_format(EntityKind::User, "usr-abcxyz").is_err());
    assert!(validate_id_format(EntityKind::User, "usr-ABC123").is_err());
    assert!(validate_id_format(EntityKind::User, "usr-12-456").is_err());
    assert!(validate_id_format(EntityKind::User, "usr-").is_err());
    assert!(validate_id_format(EntityKind::User, "").is_err());
}

/// Corrupted stored digests verify as false instead of erroring.
#[test]
fn test_malformed_digests_never_verify() {
    for stored in [
        "",
        "plaintext",
        "sha256$",
        "sha256$abc",
        "sha256$zz$deadbeef",
        "md5$aa$deadbeef",
        "sha256$aa$bb$cc",
    ] {
        assert!(
            !verify_password("s3cret!pw", stored),
            "Malformed digest {:?} must not verify",
            stored
        );
    }
}
