//! Shopkeep accounts API library.
//!
//! The GraphQL schema, storage backends and services behind the
//! `shopkeep-api` binary, exposed as a library so they can be tested and
//! reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
