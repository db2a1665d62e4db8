//! Common types shared across the tab menu crates.

pub mod error;

pub use error::{TabError, TabResult};
