//! Configuration value objects for the domain layer
//!
//! Issues found while validating configuration are reported as values so
//! that callers can decide which ones are fatal.

pub mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
