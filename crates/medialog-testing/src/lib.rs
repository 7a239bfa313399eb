//! Test utilities for Medialog crates.
//!
//! Import from `[dev-dependencies]` only, never from production code.

pub mod db;
