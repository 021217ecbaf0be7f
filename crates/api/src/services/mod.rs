//! Business services sitting between resolvers and the store.

pub mod auth;
pub mod email;
pub mod geo;
