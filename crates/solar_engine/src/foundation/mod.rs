//! Foundation module - Core utilities and types
//!
//! - Time management
//! - Logging utilities

pub mod time;
pub mod logging;
