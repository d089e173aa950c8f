// Rust guideline compliant 2026-08-14

//! Souk Core Library
//!
//! This crate provides the foundational components for the Souk marketplace engine:
//! - Data models (User, Wallet, Listing, Booking, Transaction)
//! - Field validators (titles, descriptions, prices, dates, emails, postal codes)
//! - Storage engine (JSONL read/write, streaming, file locking)
//! - Transaction status FSM (legacy aliases, transition validation)
//! - Hash ID generation, resolution, and password digests
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod storage;
pub mod validation;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::validate_transition;
pub use models::{BankingAccount, Booking, Listing, Transaction, TransactionStatus, User, Wallet};
pub use storage::{Record, Store};
