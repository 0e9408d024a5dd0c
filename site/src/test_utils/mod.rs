//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: each one records what the code under
//! test did so assertions stay plain.

pub mod fixtures;
pub mod log_capture;
pub mod mocks;

pub use fixtures::*;
pub use log_capture::EventCounter;
pub use mocks::*;
