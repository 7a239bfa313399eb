//! Domain types shared across Medialog crates.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod content;
pub mod id;
