//! Data Transfer Objects (DTOs) for the HTTP API.
//!
//! - `http`: request bodies, query strings and response bodies
//! - `conversion`: domain entity → DTO conversions

pub mod conversion;
pub mod http;
