//! Shopkeep Core - Shared account types.
//!
//! This crate provides the value types used across all Shopkeep components:
//! - `api` - GraphQL accounts API (customers, staff, addresses, tokens)
//! - `cli` - Command-line tools for migrations and staff management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. Validation that does not need a database lives here so
//! the API and the CLI reject the same inputs.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, emails, phones, country codes, permissions and
//!   Relay global IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
