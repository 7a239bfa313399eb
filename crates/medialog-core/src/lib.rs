//! Ambient helpers shared by Medialog crates: env configuration, tracing
//! setup, sea-orm error classification and serde helpers.

pub mod config;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
