//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fetch_article;
pub mod search_articles;
pub(crate) mod shared;
