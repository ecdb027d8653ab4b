//! Core types and trait definitions for the Roster contact directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod contact;
pub mod store;

pub use contact::{Contact, ContactFields};
pub use store::ContactStore;
