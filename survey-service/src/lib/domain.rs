pub mod account;
pub mod error_log;
pub mod survey;
