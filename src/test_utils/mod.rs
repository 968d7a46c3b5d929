//! Test utilities and mock implementations.
//!
//! This module provides reusable mock implementations of the domain ports
//! for use in unit and integration tests.

pub mod mocks;

pub use mocks::{MockAccountStore, MockExecutor, MockTransactionStore, RecordedCall};
