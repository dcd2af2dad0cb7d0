pub mod config;
pub mod handler;
pub mod query;
pub mod reply;
pub mod telegram;
