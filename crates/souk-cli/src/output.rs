// Rust guideline compliant 2026-08-14

//! Output formatting module for the Souk CLI.
//!
//! This module provides functionality for formatting market data
//! in various output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use serde_json::json;
use souk_app::wallet::BalanceView;
use souk_core::{Booking, Listing, Transaction, User};
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting market data in different output formats.
pub trait OutputFormatter {
    /// Formats a single user for display. The password digest is never shown.
    ///
    /// # Arguments
    /// * `user` - The user to format
    ///
    /// # Returns
    /// A formatted string representation of the user
    fn format_user(&self, user: &User) -> String;

    /// Formats a balance view for display.
    ///
    /// # Arguments
    /// * `view` - The balances to format
    ///
    /// # Returns
    /// A formatted string representation of the balances
    fn format_balances(&self, view: &BalanceView) -> String;

    /// Formats a single listing for display.
    ///
    /// # Arguments
    /// * `listing` - The listing to format
    ///
    /// # Returns
    /// A formatted string representation of the listing
    fn format_listing(&self, listing: &Listing) -> String;

    /// Formats a list of listings for display.
    ///
    /// # Arguments
    /// * `listings` - The listings to format
    ///
    /// # Returns
    /// A formatted string representation of the listing list
    fn format_listing_list(&self, listings: &[Listing]) -> String;

    /// Formats a list of bookings for display.
    ///
    /// # Arguments
    /// * `bookings` - The bookings to format
    ///
    /// # Returns
    /// A formatted string representation of the booking list
    fn format_booking_list(&self, bookings: &[Booking]) -> String;

    /// Formats a single transaction for display.
    ///
    /// # Arguments
    /// * `txn` - The transaction to format
    ///
    /// # Returns
    /// A formatted string representation of the transaction
    fn format_transaction(&self, txn: &Transaction) -> String;

    /// Formats a list of transactions for display.
    ///
    /// # Arguments
    /// * `txns` - The transactions to format
    ///
    /// # Returns
    /// A formatted string representation of the transaction list
    fn format_transaction_list(&self, txns: &[Transaction]) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// Serializes a user without the password digest.
///
/// # Arguments
/// * `user` - The user to serialize
///
/// # Returns
/// A JSON value safe to print
pub fn user_json(user: &User) -> serde_json::Value {
    json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "billing_address": user.billing_address,
        "postal_code": user.postal_code,
        "wallet": user.wallet,
        "created_at": user.created_at,
        "updated_at": user.updated_at,
    })
}

/// JSON output formatter.
///
/// Formats market data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: serde::Serialize>(value: &T, label: &str) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": format!("Failed to serialize {}", label) }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_user(&self, user: &User) -> String {
        Self::pretty(&user_json(user), "user")
    }

    fn format_balances(&self, view: &BalanceView) -> String {
        Self::pretty(view, "balances")
    }

    fn format_listing(&self, listing: &Listing) -> String {
        Self::pretty(listing, "listing")
    }

    fn format_listing_list(&self, listings: &[Listing]) -> String {
        let output = json!({
            "listings": listings,
            "total": listings.len(),
        });
        Self::pretty(&output, "listing list")
    }

    fn format_booking_list(&self, bookings: &[Booking]) -> String {
        let output = json!({
            "bookings": bookings,
            "total": bookings.len(),
        });
        Self::pretty(&output, "booking list")
    }

    fn format_transaction(&self, txn: &Transaction) -> String {
        Self::pretty(txn, "transaction")
    }

    fn format_transaction_list(&self, txns: &[Transaction]) -> String {
        let output = json!({
            "transactions": txns,
            "total": txns.len(),
        });
        Self::pretty(&output, "transaction list")
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats market data as human-readable tables with alignment.
pub struct TableFormatter {
    #[allow(dead_code)]
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_user(&self, user: &User) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:        {}\n", user.id));
        output.push_str(&format!("Username:  {}\n", user.username));
        output.push_str(&format!("Email:     {}\n", user.email));

        if let Some(address) = &user.billing_address {
            output.push_str(&format!("Billing:   {}\n", address));
        }
        if let Some(code) = &user.postal_code {
            output.push_str(&format!("Postal:    {}\n", code));
        }

        output.push_str(&format!("Wallet:    {}\n", user.wallet.balance));
        output.push_str(&format!("Bank:      {}\n", user.wallet.banking_account.balance));
        output.push_str(&format!("Created:   {}\n", user.created_at));

        output
    }

    fn format_balances(&self, view: &BalanceView) -> String {
        let mut output = String::new();
        output.push_str(&format!("Wallet:  {} {}\n", view.wallet, view.currency));
        output.push_str(&format!("Bank:    {} {}\n", view.banking_account, view.currency));
        output.push_str(&format!("Total:   {} {}\n", view.total, view.currency));
        output
    }

    fn format_listing(&self, listing: &Listing) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", listing.id));
        output.push_str(&format!("Title:       {}\n", listing.title));
        output.push_str(&format!("Price:       {}\n", listing.price));
        output.push_str(&format!("Owner:       {}\n", listing.owner_id));

        if !listing.address.is_empty() {
            output.push_str(&format!("Address:     {}\n", listing.address));
        }

        output.push_str(&format!(
            "Description: {}\n",
            wrap_text(&listing.description, 13)
        ));
        output.push_str(&format!("Created:     {}\n", listing.created_at));
        output.push_str(&format!("Modified:    {}\n", listing.last_modified_at));

        output
    }

    fn format_listing_list(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return "No listings found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Title", "Price", "Owner"]);

        for listing in listings {
            builder.push_record(vec![
                &listing.id,
                &listing.title,
                &listing.price.to_string(),
                &listing.owner_id,
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_booking_list(&self, bookings: &[Booking]) -> String {
        if bookings.is_empty() {
            return "No bookings found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Listing", "Start", "End", "Total"]);

        for booking in bookings {
            builder.push_record(vec![
                &booking.id,
                &booking.listing_id,
                &booking.start_date.to_string(),
                &booking.end_date.to_string(),
                &booking.total_cost.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_transaction(&self, txn: &Transaction) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:       {}\n", txn.id));
        output.push_str(&format!("Status:   {:?}\n", txn.status));
        output.push_str(&format!("Amount:   {}\n", txn.amount));
        output.push_str(&format!("Payer:    {}\n", txn.payer_id));
        output.push_str(&format!("Payee:    {}\n", txn.payee_id));
        output.push_str(&format!("Listing:  {}\n", txn.listing_id));
        output.push_str(&format!("Created:  {}\n", txn.created_at));
        output.push_str(&format!("Updated:  {}\n", txn.updated_at));

        output
    }

    fn format_transaction_list(&self, txns: &[Transaction]) -> String {
        if txns.is_empty() {
            return "No transactions found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Amount", "Payer", "Payee"]);

        for txn in txns {
            builder.push_record(vec![
                &txn.id,
                &format!("{:?}", txn.status),
                &txn.amount.to_string(),
                &txn.payer_id,
                &txn.payee_id,
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Formats market data as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_user(&self, user: &User) -> String {
        format!("{} {} {}\n", user.id, user.username, user.email)
    }

    fn format_balances(&self, view: &BalanceView) -> String {
        format!(
            "{} {} {} {}\n",
            view.wallet, view.banking_account, view.total, view.currency
        )
    }

    fn format_listing(&self, listing: &Listing) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", listing.id));
        output.push_str(&format!("{}\n", listing.title));
        output.push_str(&format!("{}\n", listing.price));
        output.push_str(&format!("{}\n", listing.owner_id));
        output.push_str(&format!("{}\n", listing.description));
        output
    }

    fn format_listing_list(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return "No listings found.".to_string();
        }

        let mut output = String::new();
        for listing in listings {
            output.push_str(&format!(
                "{} {} {}\n",
                listing.id, listing.price, listing.title
            ));
        }
        output
    }

    fn format_booking_list(&self, bookings: &[Booking]) -> String {
        if bookings.is_empty() {
            return "No bookings found.".to_string();
        }

        let mut output = String::new();
        for booking in bookings {
            output.push_str(&format!(
                "{} {} {} {}\n",
                booking.id, booking.listing_id, booking.start_date, booking.end_date
            ));
        }
        output
    }

    fn format_transaction(&self, txn: &Transaction) -> String {
        format!("{} {:?} {}\n", txn.id, txn.status, txn.amount)
    }

    fn format_transaction_list(&self, txns: &[Transaction]) -> String {
        if txns.is_empty() {
            return "No transactions found.".to_string();
        }

        let mut output = String::new();
        for txn in txns {
            output.push_str(&format!("{} {:?} {}\n", txn.id, txn.status, txn.amount));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
