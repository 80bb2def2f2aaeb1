//! Integration test crate for the Chorus domain core.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise end-to-end release and royalty flows across multiple
//! workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p chorus-integration-tests
//! ```
