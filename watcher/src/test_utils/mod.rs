//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks keep test setup explicit: each test states exactly what the
//! storefront returns and inspects exactly what reached the sink, with no
//! macro machinery in between.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
