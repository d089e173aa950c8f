// Rust guideline compliant 2026-08-14

//! Property-based tests for the transaction status FSM.
//!
//! These tests validate universal properties that should hold across all
//! status pairs and both guarding modes.

use proptest::prelude::*;
use souk_core::TransactionStatus;

/// Generates arbitrary TransactionStatus values.
fn arb_status() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        Just(TransactionStatus::InProgress),
        Just(TransactionStatus::Completed),
        Just(TransactionStatus::Cancelled),
    ]
}

proptest! {
    /// Property: legacy mode permissiveness
    /// With strict guarding off, any status may move to any status.
    #[test]
    fn prop_legacy_mode_allows_all(from in arb_status(), to in arb_status()) {
        prop_assert!(from.can_transition_to(to, false).is_ok());
    }

    /// Property: self-transitions always succeed
    /// A transition that does not change the status never errors, in
    /// either guarding mode.
    #[test]
    fn prop_self_transition_always_ok(status in arb_status(), strict in any::<bool>()) {
        prop_assert!(status.can_transition_to(status, strict).is_ok());
    }

    /// Property: strict rejections come only from terminal statuses
    /// A strict-mode rejection implies the source status is terminal and
    /// the target differs from it.
    #[test]
    fn prop_strict_rejections_are_terminal_exits(from in arb_status(), to in arb_status()) {
        let result = from.can_transition_to(to, true);
        if result.is_err() {
            prop_assert!(from.is_terminal(), "Only terminal statuses are frozen");
            prop_assert!(to != from, "Self-transitions are never rejected");
        }
    }

    /// Property: in-progress is never frozen
    /// Moves out of InProgress succeed in both modes.
    #[test]
    fn prop_in_progress_always_open(to in arb_status(), strict in any::<bool>()) {
        prop_assert!(TransactionStatus::InProgress.can_transition_to(to, strict).is_ok());
    }

    /// Property: valid_transitions agrees with can_transition_to
    /// The reachable-status list contains exactly the targets for which
    /// can_transition_to returns Ok.
    #[test]
    fn prop_valid_transitions_consistency(from in arb_status(), strict in any::<bool>()) {
        let valid_list = from.valid_transitions(strict);
        for target in [
            TransactionStatus::InProgress,
            TransactionStatus::Completed,
            TransactionStatus::Cancelled,
        ] {
            prop_assert_eq!(
                valid_list.contains(&target),
                from.can_transition_to(target, strict).is_ok(),
                "Disagreement for {:?} → {:?} (strict={})",
                from,
                target,
                strict
            );
        }
    }

    /// Property: strict mode only removes moves
    /// Everything allowed in strict mode is also allowed in legacy mode.
    #[test]
    fn prop_strict_is_subset_of_legacy(from in arb_status(), to in arb_status()) {
        if from.can_transition_to(to, true).is_ok() {
            prop_assert!(from.can_transition_to(to, false).is_ok());
        }
    }

    /// Property: alias round trip
    /// Every status parses back from its own legacy alias.
    #[test]
    fn prop_alias_round_trip(status in arb_status()) {
        let parsed = TransactionStatus::from_alias(status.alias());
        prop_assert_eq!(parsed.expect("alias should parse"), status);
    }

    /// Property: unknown strings never parse
    /// Strings outside the six accepted names are rejected with the
    /// offending value preserved in the message.
    #[test]
    fn prop_unknown_strings_rejected(s in "[a-zA-Z ]{1,30}") {
        let known = [
            "transactionInProgress",
            "transactionCompleted",
            "transactionCancelled",
            "in_progress",
            "completed",
            "cancelled",
        ];
        prop_assume!(!known.contains(&s.as_str()));
        let err = TransactionStatus::from_alias(&s).expect_err("unknown name should fail");
        prop_assert!(err.to_string().contains(&s));
    }
}
