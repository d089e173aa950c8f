// Rust guideline compliant 2026-08-18

//! Market directory discovery and path management utilities.

use crate::error::{AppError, Result};
use souk_core::{Booking, Config, Listing, Store, Transaction, User};
use std::path::{Path, PathBuf};

/// Market path metadata for a Souk workspace.
#[derive(Debug, Clone)]
pub struct MarketContext {
    root: PathBuf,
    market_dir: PathBuf,
    users_path: PathBuf,
    listings_path: PathBuf,
    bookings_path: PathBuf,
    transactions_path: PathBuf,
    config_path: PathBuf,
    session_path: PathBuf,
}

impl MarketContext {
    /// Discovers a Souk market starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `market_root` - Optional market root to pin discovery
    ///
    /// # Returns
    ///
    /// A `MarketContext` with resolved paths for the market.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The market root cannot be resolved
    /// - The `.souk` directory is missing
    pub fn discover(market_root: Option<&Path>) -> Result<Self> {
        let root = match market_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let market_dir = root.join(".souk");
        if !market_dir.exists() {
            return Err(AppError::MarketNotInitialized {
                path: market_dir.clone(),
            });
        }

        Ok(Self::from_parts(root, market_dir))
    }

    /// Initializes a Souk market at the given root.
    ///
    /// Creates the `.souk` directory, empty record files, and a default
    /// configuration. Existing files are never truncated, so running
    /// init on a live market is a no-op for its data.
    ///
    /// # Arguments
    ///
    /// * `market_root` - Directory the market lives under
    ///
    /// # Returns
    ///
    /// A `MarketContext` for the initialized market.
    ///
    /// # Errors
    ///
    /// Returns an error if directories or files cannot be created.
    pub fn init(market_root: &Path) -> Result<Self> {
        let root = market_root.to_path_buf();
        let market_dir = root.join(".souk");
        std::fs::create_dir_all(&market_dir)?;

        let ctx = Self::from_parts(root, market_dir);

        for path in [
            &ctx.users_path,
            &ctx.listings_path,
            &ctx.bookings_path,
            &ctx.transactions_path,
        ] {
            if !path.exists() {
                std::fs::File::create(path)?;
            }
        }

        if !ctx.config_path.exists() {
            Config::default().save(&ctx.market_dir)?;
        }

        Ok(ctx)
    }

    fn from_parts(root: PathBuf, market_dir: PathBuf) -> Self {
        Self {
            root,
            users_path: market_dir.join("users.jsonl"),
            listings_path: market_dir.join("listings.jsonl"),
            bookings_path: market_dir.join("bookings.jsonl"),
            transactions_path: market_dir.join("transactions.jsonl"),
            config_path: market_dir.join("config.toml"),
            session_path: market_dir.join("session.json"),
            market_dir,
        }
    }

    /// Returns the market root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.souk` directory path.
    #[must_use]
    pub fn market_dir(&self) -> &Path {
        self.market_dir.as_path()
    }

    /// Returns the users JSONL path.
    #[must_use]
    pub fn users_path(&self) -> &Path {
        self.users_path.as_path()
    }

    /// Returns the listings JSONL path.
    #[must_use]
    pub fn listings_path(&self) -> &Path {
        self.listings_path.as_path()
    }

    /// Returns the bookings JSONL path.
    #[must_use]
    pub fn bookings_path(&self) -> &Path {
        self.bookings_path.as_path()
    }

    /// Returns the transactions JSONL path.
    #[must_use]
    pub fn transactions_path(&self) -> &Path {
        self.transactions_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Returns the session JSON path.
    #[must_use]
    pub fn session_path(&self) -> &Path {
        self.session_path.as_path()
    }

    /// Opens storage for the users file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn users_store(&self) -> Result<Store<User>> {
        Ok(Store::new(self.users_path.clone())?)
    }

    /// Opens storage for the listings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn listings_store(&self) -> Result<Store<Listing>> {
        Ok(Store::new(self.listings_path.clone())?)
    }

    /// Opens storage for the bookings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn bookings_store(&self) -> Result<Store<Booking>> {
        Ok(Store::new(self.bookings_path.clone())?)
    }

    /// Opens storage for the transactions file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn transactions_store(&self) -> Result<Store<Transaction>> {
        Ok(Store::new(self.transactions_path.clone())?)
    }

    /// Loads market configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.market_dir())?)
    }

    /// Loads a user by full ID, reporting the given role on failure.
    ///
    /// # Arguments
    ///
    /// * `id` - Full user ID
    /// * `role` - Role name used in the error message (e.g. "Buyer")
    ///
    /// # Errors
    ///
    /// Returns an unknown-ID error naming `role` if no user has this ID.
    pub fn find_user(&self, id: &str, role: &'static str) -> Result<User> {
        Ok(crate::ids::load_role(&self.users_store()?, id, role)?)
    }

    /// Looks a user up by exact email.
    ///
    /// # Errors
    ///
    /// Returns an error if the users file cannot be read.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users_store()?.load_all()?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    /// Loads a listing by full ID.
    ///
    /// # Errors
    ///
    /// Returns an unknown-ID error if no listing has this ID.
    pub fn find_listing(&self, id: &str) -> Result<Listing> {
        Ok(crate::ids::load_role(&self.listings_store()?, id, "Listing")?)
    }

    /// Looks a listing up by exact title.
    ///
    /// # Errors
    ///
    /// Returns an error if the listings file cannot be read.
    pub fn find_listing_by_title(&self, title: &str) -> Result<Option<Listing>> {
        let listings = self.listings_store()?.load_all()?;
        Ok(listings.into_iter().find(|l| l.title == title))
    }

    /// Loads all bookings for one listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the bookings file cannot be read.
    pub fn find_bookings_by_listing(&self, listing_id: &str) -> Result<Vec<Booking>> {
        let bookings = self.bookings_store()?.load_all()?;
        Ok(bookings
            .into_iter()
            .filter(|b| b.listing_id == listing_id)
            .collect())
    }
}
