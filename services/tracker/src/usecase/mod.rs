pub mod account;
pub mod catalog;
pub mod list;
pub mod notification;
pub mod reward;
