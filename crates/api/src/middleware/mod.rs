//! HTTP middleware and extractors.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (record `x-request-id` in the span)
//!
//! Authentication happens per request in the [`OptionalUser`] extractor.

pub mod auth;
pub mod request_id;

pub use auth::{ClientIp, OptionalUser};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
