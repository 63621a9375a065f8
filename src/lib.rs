//! mailsense: batch text analysis for email.

pub mod analysis;
pub mod config;
pub mod error;
pub mod lang;
pub mod models;
pub mod report;
pub mod source;
