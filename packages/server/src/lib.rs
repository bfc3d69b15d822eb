//! Balloon backend library.
//!
//! A small party-site backend: ephemeral visitor sessions with deep-merged state,
//! a capacity-bounded leaderboard, a guestbook and password-gated pages, all held
//! in process memory and served over an axum HTTP/JSON API.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
