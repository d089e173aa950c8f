// Rust guideline compliant 2026-08-18

//! Integration tests for wallet deposits, transfers, and balance views.

use rust_decimal::Decimal;
use souk_app::{balances, deposit, register, top_up, ErrorCode, MarketContext};
use tempfile::TempDir;

fn market() -> (TempDir, MarketContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = MarketContext::init(temp_dir.path()).expect("Failed to init market");
    (temp_dir, ctx)
}

#[test]
fn test_deposit_funds_banking_account() {
    let (_guard, ctx) = market();
    let user = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    let updated =
        deposit(&ctx, &user.id, Decimal::new(25_000, 2)).expect("deposit should succeed");

    assert_eq!(updated.wallet.banking_account.balance, Decimal::new(25_000, 2));
    assert_eq!(updated.wallet.balance, Decimal::ZERO);

    let stored = ctx.find_user(&user.id, "User").expect("user stored");
    assert_eq!(stored.wallet.banking_account.balance, Decimal::new(25_000, 2));
}

#[test]
fn test_top_up_conserves_total() {
    let (_guard, ctx) = market();
    let user = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    deposit(&ctx, &user.id, Decimal::new(25_000, 2)).expect("deposit");
    let updated = top_up(&ctx, &user.id, Decimal::new(10_000, 2)).expect("top up");

    assert_eq!(updated.wallet.balance, Decimal::new(10_000, 2));
    assert_eq!(updated.wallet.banking_account.balance, Decimal::new(15_000, 2));
    assert_eq!(
        updated.wallet.balance + updated.wallet.banking_account.balance,
        Decimal::new(25_000, 2),
        "the transfer must conserve the combined balance"
    );
}

#[test]
fn test_top_up_exceeding_banking_balance_fails() {
    let (_guard, ctx) = market();
    let user = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    deposit(&ctx, &user.id, Decimal::new(2_000, 2)).expect("deposit");
    let err = top_up(&ctx, &user.id, Decimal::new(5_000, 2))
        .expect_err("overdrawing the banking account should fail");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(
        err.to_string(),
        "Transfer exceeds banking account balance: 50.00"
    );

    // A failed transfer moves nothing
    let stored = ctx.find_user(&user.id, "User").expect("user stored");
    assert_eq!(stored.wallet.balance, Decimal::ZERO);
    assert_eq!(stored.wallet.banking_account.balance, Decimal::new(2_000, 2));
}

#[test]
fn test_negative_amounts_are_rejected() {
    let (_guard, ctx) = market();
    let user = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    let err = deposit(&ctx, &user.id, Decimal::new(-500, 2))
        .expect_err("negative deposit should fail");
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert_eq!(err.to_string(), "Invalid Amount: -5.00");

    let err =
        top_up(&ctx, &user.id, Decimal::new(-500, 2)).expect_err("negative top up should fail");
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_unknown_user_cannot_be_funded() {
    let (_guard, ctx) = market();

    let err = deposit(&ctx, "usr-zzzzzz", Decimal::new(1_000, 2))
        .expect_err("unknown user should fail");
    assert_eq!(err.to_string(), "Invalid User ID: usr-zzzzzz");
}

#[test]
fn test_balance_view_reports_config_currency() {
    let (_guard, ctx) = market();
    let user = register(&ctx, "alice", "alice@example.com", "s3cret!pw").expect("register");

    deposit(&ctx, &user.id, Decimal::new(30_000, 2)).expect("deposit");
    let user = top_up(&ctx, &user.id, Decimal::new(12_500, 2)).expect("top up");

    let config = ctx.load_config().expect("config loads");
    let view = balances(&user, &config.currency);

    assert_eq!(view.wallet, Decimal::new(12_500, 2));
    assert_eq!(view.banking_account, Decimal::new(17_500, 2));
    assert_eq!(view.total, Decimal::new(30_000, 2));
    assert_eq!(view.currency, "CAD");
}
