//! Data models for roster members, match records and configuration.

pub mod config;
pub mod member;
pub mod record;
