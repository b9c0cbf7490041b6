//! Core domain concepts shared across all subdomains.
//!
//! - [`error::RetrievalError`]: every failure of a search or fetch
//! - [`error::ErrorKind`]: its machine-readable classification

pub mod error;
