// Rust guideline compliant 2026-08-14

//! Command implementations for the Souk CLI.

pub mod account;
pub mod book;
pub mod bookings;
pub mod init;
pub mod listing;
pub mod login;
pub mod logout;
pub mod register;
pub mod session;
pub mod txn;
pub mod wallet;
pub mod whoami;
