// Rust guideline compliant 2026-08-18

//! Account registration, login, and profile management.

use crate::error::{AppError, Result};
use crate::market::MarketContext;
use serde::Serialize;
use souk_core::{validation, Error as CoreError, User};

/// Requested profile field changes. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    /// New username.
    pub username: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New billing address.
    pub billing_address: Option<String>,
    /// New postal code.
    pub postal_code: Option<String>,
}

impl ProfileChanges {
    /// Returns true when no field change was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.billing_address.is_none()
            && self.postal_code.is_none()
    }
}

/// A field change that was rejected, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct FieldOutcome {
    /// Field name.
    pub field: &'static str,
    /// Rejection message.
    pub error: String,
}

/// Per-field outcomes of a batch profile update.
///
/// Fields are applied independently; one rejected field never blocks
/// the others.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReport {
    /// Fields that were applied.
    pub applied: Vec<&'static str>,
    /// Fields that were rejected.
    pub rejected: Vec<FieldOutcome>,
}

impl UpdateReport {
    /// Returns true when every requested field was applied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Records one field's outcome.
    pub fn record(&mut self, field: &'static str, result: souk_core::Result<()>) {
        match result {
            Ok(()) => self.applied.push(field),
            Err(e) => self.rejected.push(FieldOutcome {
                field,
                error: e.to_string(),
            }),
        }
    }

    /// Records a rejection produced outside a setter.
    pub fn reject(&mut self, field: &'static str, error: String) {
        self.rejected.push(FieldOutcome { field, error });
    }
}

/// Registers a new user with an empty wallet.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `username` - Display name
/// * `email` - Login email, unique across the market
/// * `password` - Plaintext password, digested before storage
///
/// # Returns
///
/// The persisted user.
///
/// # Errors
///
/// Returns a validation error for a malformed field, or a conflict
/// error if the email is already registered.
pub fn register(
    ctx: &MarketContext,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User> {
    let store = ctx.users_store()?;
    let user = store.with_lock(|| {
        let user = User::new(username.to_string(), email.to_string(), password)?;
        let users = store.load_all()?;
        if users.iter().any(|u| u.email == email) {
            return Err(CoreError::Conflict(format!(
                "Email already registered: {}",
                email
            )));
        }
        store.save(&user)?;
        Ok(user)
    })?;
    Ok(user)
}

/// Verifies login credentials and returns the matching user.
///
/// Input shapes are checked before the store is read, and every failure
/// mode maps to the same error so callers cannot probe for accounts.
///
/// # Errors
///
/// Returns the credentials error if the email or password is malformed,
/// no user has the email, or the password does not match.
pub fn login(ctx: &MarketContext, email: &str, password: &str) -> Result<User> {
    if !validation::valid_email(email) || !validation::valid_password(password) {
        return Err(AppError::InvalidCredentials);
    }

    let user = ctx
        .find_user_by_email(email)?
        .ok_or(AppError::InvalidCredentials)?;

    if !user.verify_password(password) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(user)
}

/// Applies a batch of profile changes, each field independently.
///
/// Valid fields are applied and persisted in a single save; invalid
/// fields are reported without blocking the rest.
///
/// # Arguments
///
/// * `ctx` - Market context
/// * `user_id` - Full ID of the user to update
/// * `changes` - Requested field changes
///
/// # Returns
///
/// The user after the update and a per-field report.
///
/// # Errors
///
/// Returns an unknown-ID error if no user has the ID. Individual field
/// failures are reported, not returned.
pub fn update_profile(
    ctx: &MarketContext,
    user_id: &str,
    changes: &ProfileChanges,
) -> Result<(User, UpdateReport)> {
    let store = ctx.users_store()?;
    let outcome = store.with_lock(|| {
        let mut users = store.load_all()?;
        let pos = users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or_else(|| CoreError::UnknownId {
                role: "User",
                id: user_id.to_string(),
            })?;

        let mut user = users[pos].clone();
        let mut report = UpdateReport::default();

        if let Some(username) = &changes.username {
            report.record("username", user.set_username(username));
        }

        if let Some(email) = &changes.email {
            if users.iter().any(|u| u.email == *email && u.id != user_id) {
                report.reject("email", format!("Email already registered: {}", email));
            } else {
                report.record("email", user.set_email(email));
            }
        }

        if let Some(address) = &changes.billing_address {
            report.record("billing_address", user.set_billing_address(address));
        }

        if let Some(code) = &changes.postal_code {
            report.record("postal_code", user.set_postal_code(code));
        }

        if !report.applied.is_empty() {
            users[pos] = user.clone();
            store.save_all(&users)?;
        }

        Ok((user, report))
    })?;
    Ok(outcome)
}

/// Sets a user's username.
///
/// # Errors
///
/// Returns an unknown-ID error if no user has the ID, or a validation
/// error if the username is malformed.
pub fn update_username(ctx: &MarketContext, user_id: &str, username: &str) -> Result<User> {
    update_field(ctx, user_id, |user, _| user.set_username(username))
}

/// Sets a user's login email, keeping emails unique.
///
/// # Errors
///
/// Returns an unknown-ID error if no user has the ID, a validation
/// error if the email is malformed, or a conflict error if another
/// user already holds it.
pub fn update_email(ctx: &MarketContext, user_id: &str, email: &str) -> Result<User> {
    update_field(ctx, user_id, |user, all| {
        if all.iter().any(|u| u.email == email && u.id != user.id) {
            return Err(CoreError::Conflict(format!(
                "Email already registered: {}",
                email
            )));
        }
        user.set_email(email)
    })
}

/// Sets a user's billing address.
///
/// # Errors
///
/// Returns an unknown-ID error if no user has the ID.
pub fn update_billing_address(ctx: &MarketContext, user_id: &str, address: &str) -> Result<User> {
    update_field(ctx, user_id, |user, _| user.set_billing_address(address))
}

/// Sets a user's postal code.
///
/// # Errors
///
/// Returns an unknown-ID error if no user has the ID, or a validation
/// error if the code is not a Canadian postal code.
pub fn update_postal_code(ctx: &MarketContext, user_id: &str, code: &str) -> Result<User> {
    update_field(ctx, user_id, |user, _| user.set_postal_code(code))
}

pub(crate) fn update_field<F>(ctx: &MarketContext, user_id: &str, apply: F) -> Result<User>
where
    F: FnOnce(&mut User, &[User]) -> souk_core::Result<()>,
{
    let store = ctx.users_store()?;
    let user = store.with_lock(|| {
        let mut users = store.load_all()?;
        let pos = users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or_else(|| CoreError::UnknownId {
                role: "User",
                id: user_id.to_string(),
            })?;

        let mut user = users[pos].clone();
        apply(&mut user, &users)?;
        users[pos] = user.clone();
        store.save_all(&users)?;
        Ok(user)
    })?;
    Ok(user)
}
