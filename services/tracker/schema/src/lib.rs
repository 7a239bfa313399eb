//! sea-orm entities for the tracker tables.
//!
//! Timestamps are `timestamp without time zone` columns holding UTC.

pub mod books;
pub mod movies;
pub mod notifications;
pub mod reading_list;
pub mod rewards;
pub mod transactions;
pub mod users;
pub mod watching_list;
