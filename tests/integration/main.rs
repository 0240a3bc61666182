//! Integration tests; they need a live PostgreSQL or a running server.
//!
//! Run with: cargo test -- --ignored

mod api_tests;
mod store_tests;
