//! Request-level extractors and middleware.

pub mod auth;
