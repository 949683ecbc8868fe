//! Utility functions for terminal output.

pub mod format;

pub use format::{format_date, format_optional, truncate_string};
