//! Shared utilities for the Balloon packages.

pub mod logger;
pub mod time;
