// Rust guideline compliant 2026-08-14

//! Core data models for the Souk marketplace.

use crate::identity::{self, EntityKind};
use crate::storage::Record;
use crate::validation;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status of a Transaction in the finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Funds are held; the booking has not been settled.
    InProgress,
    /// Funds were released to the payee.
    Completed,
    /// Funds were returned to the payer.
    Cancelled,
}

/// External funds source backing a user's wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BankingAccount {
    /// Current account balance.
    pub balance: Decimal,
}

impl BankingAccount {
    /// Adds funds to the account.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative.
    pub fn add_balance(&mut self, amount: Decimal) -> crate::Result<()> {
        if amount < Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: amount.to_string(),
            });
        }
        self.balance += amount;
        Ok(())
    }
}

/// A user's spendable balance and its backing account.
///
/// The sum of the two balances is invariant under `transfer_balance`,
/// whether the transfer succeeds or fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Wallet {
    /// Spendable balance available for bookings.
    pub balance: Decimal,
    /// Backing account funds are transferred from.
    pub banking_account: BankingAccount,
}

impl Wallet {
    /// Moves funds from the backing account into the spendable balance.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is negative or exceeds the backing
    /// account balance. On error, both balances are unchanged.
    pub fn transfer_balance(&mut self, amount: Decimal) -> crate::Result<()> {
        if amount < Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: amount.to_string(),
            });
        }
        if amount > self.banking_account.balance {
            return Err(crate::Error::Conflict(format!(
                "Transfer exceeds banking account balance: {}",
                amount
            )));
        }
        self.banking_account.balance -= amount;
        self.balance += amount;
        Ok(())
    }

    /// Removes funds from the spendable balance.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative `amount`, or the booking
    /// balance error if the balance cannot cover it.
    pub fn debit(&mut self, amount: Decimal) -> crate::Result<()> {
        if amount < Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: amount.to_string(),
            });
        }
        if amount > self.balance {
            return Err(crate::Error::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Returns funds to the spendable balance.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative.
    pub fn credit(&mut self, amount: Decimal) -> crate::Result<()> {
        if amount < Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: amount.to_string(),
            });
        }
        self.balance += amount;
        Ok(())
    }
}

/// A registered marketplace user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique hash-based identifier (format: usr-XXXXXX).
    pub id: String,
    /// Display name, 3-19 alphanumerics with internal spaces.
    pub username: String,
    /// Login email, unique across all users.
    pub email: String,
    /// Salted password digest. The plaintext is never stored.
    pub password_digest: String,
    /// Free-form billing address.
    #[serde(default)]
    pub billing_address: Option<String>,
    /// Canadian postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Spendable funds and backing account.
    #[serde(default)]
    pub wallet: Wallet,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of last profile change.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with an empty wallet.
    ///
    /// # Arguments
    ///
    /// * `username` - Display name
    /// * `email` - Login email
    /// * `password` - Plaintext password, digested before storage
    ///
    /// # Returns
    ///
    /// A new user with zero balances and no address fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the username, email, or password
    /// fails its validator. Email uniqueness is the caller's concern.
    pub fn new(username: String, email: String, password: &str) -> crate::Result<Self> {
        if !validation::valid_username(&username) {
            return Err(crate::Error::InvalidField {
                field: "Username",
                value: username,
            });
        }
        if !validation::valid_email(&email) {
            return Err(crate::Error::InvalidField {
                field: "Email",
                value: email,
            });
        }
        if !validation::valid_password(password) {
            return Err(crate::Error::InvalidField {
                field: "Password",
                value: "must be 6+ characters with a letter, a digit, and a symbol".to_string(),
            });
        }

        let now = Utc::now();
        let id = identity::generate_id(EntityKind::User, &email, now.timestamp(), 0);

        Ok(Self {
            id,
            username,
            email,
            password_digest: identity::hash_password(password),
            billing_address: None,
            postal_code: None,
            wallet: Wallet::default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Verifies a login password against the stored digest.
    pub fn verify_password(&self, password: &str) -> bool {
        identity::verify_password(password, &self.password_digest)
    }

    /// Sets a new username.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the username is malformed.
    pub fn set_username(&mut self, username: &str) -> crate::Result<()> {
        if !validation::valid_username(username) {
            return Err(crate::Error::InvalidField {
                field: "Username",
                value: username.to_string(),
            });
        }
        self.username = username.to_string();
        self.touch();
        Ok(())
    }

    /// Sets a new login email. Uniqueness is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the email is malformed.
    pub fn set_email(&mut self, email: &str) -> crate::Result<()> {
        if !validation::valid_email(email) {
            return Err(crate::Error::InvalidField {
                field: "Email",
                value: email.to_string(),
            });
        }
        self.email = email.to_string();
        self.touch();
        Ok(())
    }

    /// Sets the billing address. Billing addresses have no format rule.
    pub fn set_billing_address(&mut self, address: &str) -> crate::Result<()> {
        self.billing_address = Some(address.to_string());
        self.touch();
        Ok(())
    }

    /// Sets the postal code.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the code is not a Canadian postal code.
    pub fn set_postal_code(&mut self, code: &str) -> crate::Result<()> {
        if !validation::valid_postal_code(code) {
            return Err(crate::Error::InvalidField {
                field: "Postal Code",
                value: code.to_string(),
            });
        }
        self.postal_code = Some(code.to_string());
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validates the user record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ID format is invalid
    /// - The username, email, or postal code fails its validator
    /// - The password digest is empty
    /// - Either balance is negative
    pub fn validate(&self) -> crate::Result<()> {
        identity::validate_id_format(EntityKind::User, &self.id)?;

        if !validation::valid_username(&self.username) {
            return Err(crate::Error::InvalidField {
                field: "Username",
                value: self.username.clone(),
            });
        }

        if !validation::valid_email(&self.email) {
            return Err(crate::Error::InvalidField {
                field: "Email",
                value: self.email.clone(),
            });
        }

        if self.password_digest.is_empty() {
            return Err(crate::Error::InvalidField {
                field: "Password",
                value: "missing digest".to_string(),
            });
        }

        if let Some(code) = &self.postal_code {
            if !validation::valid_postal_code(code) {
                return Err(crate::Error::InvalidField {
                    field: "Postal Code",
                    value: code.clone(),
                });
            }
        }

        if self.wallet.balance < Decimal::ZERO || self.wallet.banking_account.balance < Decimal::ZERO
        {
            return Err(crate::Error::InvalidField {
                field: "Balance",
                value: self.wallet.balance.to_string(),
            });
        }

        Ok(())
    }
}

/// A property listed for nightly booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique hash-based identifier (format: lst-XXXXXX).
    pub id: String,
    /// Listing title, unique across the market.
    pub title: String,
    /// Detailed description, strictly longer than the title.
    pub description: String,
    /// Nightly price. Only moves upward over the listing's lifetime.
    pub price: Decimal,
    /// Street address. Not format-checked.
    #[serde(default)]
    pub address: String,
    /// ID of the owning user. Immutable after creation.
    pub owner_id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of last field change.
    pub last_modified_at: DateTime<Utc>,
}

impl Listing {
    /// Creates a new listing.
    ///
    /// # Arguments
    ///
    /// * `title` - Listing title; uniqueness is the caller's concern
    /// * `description` - Detailed description
    /// * `price` - Nightly price
    /// * `address` - Street address
    /// * `owner_id` - ID of the owning user; existence is the caller's concern
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title, description, price, or
    /// owner ID format fails its validator.
    pub fn new(
        title: String,
        description: String,
        price: Decimal,
        address: String,
        owner_id: String,
    ) -> crate::Result<Self> {
        if !validation::valid_title(&title) {
            return Err(crate::Error::InvalidField {
                field: "Title",
                value: title,
            });
        }
        if !validation::valid_description(&description, &title) {
            return Err(crate::Error::InvalidField {
                field: "Description",
                value: description,
            });
        }
        if !validation::valid_price(price) {
            return Err(crate::Error::InvalidField {
                field: "Price",
                value: price.to_string(),
            });
        }
        identity::validate_id_format(EntityKind::User, &owner_id)?;

        let now = Utc::now();
        let id = identity::generate_id(EntityKind::Listing, &title, now.timestamp(), 0);

        Ok(Self {
            id,
            title,
            description,
            price,
            address,
            owner_id,
            created_at: now,
            last_modified_at: now,
        })
    }

    /// Sets a new title. Uniqueness is the caller's concern.
    ///
    /// The description must stay strictly longer than the title, so a
    /// title at least as long as the current description is rejected.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title is malformed or too long
    /// for the current description.
    pub fn set_title(&mut self, title: &str) -> crate::Result<()> {
        if !validation::valid_title(title)
            || self.description.chars().count() <= title.chars().count()
        {
            return Err(crate::Error::InvalidField {
                field: "Title",
                value: title.to_string(),
            });
        }
        self.title = title.to_string();
        self.touch();
        Ok(())
    }

    /// Sets a new description, checked against the current title.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the description is outside the
    /// length window or not longer than the title.
    pub fn set_description(&mut self, description: &str) -> crate::Result<()> {
        if !validation::valid_description(description, &self.title) {
            return Err(crate::Error::InvalidField {
                field: "Description",
                value: description.to_string(),
            });
        }
        self.description = description.to_string();
        self.touch();
        Ok(())
    }

    /// Sets a new nightly price. Prices only move strictly upward.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the price is outside the accepted
    /// window or not higher than the current price.
    pub fn set_price(&mut self, price: Decimal) -> crate::Result<()> {
        if !validation::valid_price(price) || price <= self.price {
            return Err(crate::Error::InvalidField {
                field: "Price",
                value: price.to_string(),
            });
        }
        self.price = price;
        self.touch();
        Ok(())
    }

    /// Sets the street address. Addresses have no format rule.
    pub fn set_address(&mut self, address: &str) -> crate::Result<()> {
        self.address = address.to_string();
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.last_modified_at = Utc::now();
    }

    /// Validates the listing record.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or owner ID format, title, description,
    /// or price fails its validator.
    pub fn validate(&self) -> crate::Result<()> {
        identity::validate_id_format(EntityKind::Listing, &self.id)?;
        identity::validate_id_format(EntityKind::User, &self.owner_id)?;

        if !validation::valid_title(&self.title) {
            return Err(crate::Error::InvalidField {
                field: "Title",
                value: self.title.clone(),
            });
        }
        if !validation::valid_description(&self.description, &self.title) {
            return Err(crate::Error::InvalidField {
                field: "Description",
                value: self.description.clone(),
            });
        }
        if !validation::valid_price(self.price) {
            return Err(crate::Error::InvalidField {
                field: "Price",
                value: self.price.to_string(),
            });
        }

        Ok(())
    }
}

/// A reservation of a listing over a half-open date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique hash-based identifier (format: bkg-XXXXXX).
    pub id: String,
    /// ID of the booking user.
    pub buyer_id: String,
    /// ID of the booked listing.
    pub listing_id: String,
    /// First night, inclusive.
    pub start_date: NaiveDate,
    /// Checkout day, exclusive.
    pub end_date: NaiveDate,
    /// Nightly price times nights at booking time.
    pub total_cost: Decimal,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new booking over `[start_date, end_date)`.
    ///
    /// # Errors
    ///
    /// Returns the date-order error if the range is empty or reversed, or
    /// a validation error for a negative total cost.
    pub fn new(
        buyer_id: String,
        listing_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_cost: Decimal,
    ) -> crate::Result<Self> {
        if start_date >= end_date {
            return Err(crate::Error::DateOrder);
        }
        if total_cost < Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: total_cost.to_string(),
            });
        }

        let now = Utc::now();
        let seed = format!("{}:{}:{}", buyer_id, listing_id, start_date);
        let id = identity::generate_id(EntityKind::Booking, &seed, now.timestamp(), 0);

        Ok(Self {
            id,
            buyer_id,
            listing_id,
            start_date,
            end_date,
            total_cost,
            created_at: now,
        })
    }

    /// Number of nights covered by the half-open range.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Returns true when `[start, end)` intersects this booking's range.
    ///
    /// Ranges are half-open, so a booking ending on the day another
    /// starts does not overlap it.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date < end && start < self.end_date
    }

    /// Validates the booking record.
    ///
    /// # Errors
    ///
    /// Returns an error if any ID format is invalid, the range is empty
    /// or reversed, or the total cost is negative.
    pub fn validate(&self) -> crate::Result<()> {
        identity::validate_id_format(EntityKind::Booking, &self.id)?;
        identity::validate_id_format(EntityKind::User, &self.buyer_id)?;
        identity::validate_id_format(EntityKind::Listing, &self.listing_id)?;

        if self.start_date >= self.end_date {
            return Err(crate::Error::DateOrder);
        }
        if self.total_cost < Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: self.total_cost.to_string(),
            });
        }

        Ok(())
    }
}

/// Funds held against a booking until settlement or cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique hash-based identifier (format: txn-XXXXXX).
    pub id: String,
    /// ID of the paying user (the buyer).
    pub payer_id: String,
    /// ID of the paid user (the listing owner).
    pub payee_id: String,
    /// ID of the booked listing.
    pub listing_id: String,
    /// Amount held.
    pub amount: Decimal,
    /// Current status in the FSM.
    pub status: TransactionStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of last status change.
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Opens a new in-progress transaction holding `amount`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the amount is not positive.
    pub fn new(
        payer_id: String,
        payee_id: String,
        listing_id: String,
        amount: Decimal,
    ) -> crate::Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: amount.to_string(),
            });
        }

        let now = Utc::now();
        let seed = format!("{}:{}:{}", payer_id, payee_id, listing_id);
        let id = identity::generate_id(EntityKind::Transaction, &seed, now.timestamp(), 0);

        Ok(Self {
            id,
            payer_id,
            payee_id,
            listing_id,
            amount,
            status: TransactionStatus::InProgress,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a status change without any transition guard.
    ///
    /// Guarding is the caller's concern; see [`crate::fsm::validate_transition`].
    pub fn set_status(&mut self, status: TransactionStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Assigns a status from a dynamic JSON value, accepting canonical
    /// names and legacy camel-case aliases.
    ///
    /// # Errors
    ///
    /// Returns a type error for non-string values and a value error for
    /// unrecognized strings.
    pub fn set_status_value(&mut self, value: &serde_json::Value) -> crate::Result<()> {
        let status = TransactionStatus::from_value(value)?;
        self.set_status(status);
        Ok(())
    }

    /// Validates the transaction record.
    ///
    /// # Errors
    ///
    /// Returns an error if any ID format is invalid or the amount is not
    /// positive.
    pub fn validate(&self) -> crate::Result<()> {
        identity::validate_id_format(EntityKind::Transaction, &self.id)?;
        identity::validate_id_format(EntityKind::User, &self.payer_id)?;
        identity::validate_id_format(EntityKind::User, &self.payee_id)?;
        identity::validate_id_format(EntityKind::Listing, &self.listing_id)?;

        if self.amount <= Decimal::ZERO {
            return Err(crate::Error::InvalidField {
                field: "Amount",
                value: self.amount.to_string(),
            });
        }

        Ok(())
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> crate::Result<()> {
        User::validate(self)
    }
}

impl Record for Listing {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> crate::Result<()> {
        Listing::validate(self)
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> crate::Result<()> {
        Booking::validate(self)
    }
}

impl Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> crate::Result<()> {
        Transaction::validate(self)
    }
}
