mod account_test;
mod catalog_test;
mod list_test;
mod notification_test;
mod reward_test;
