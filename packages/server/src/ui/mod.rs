//! HTTP サーバー（axum）
//!
//! `/api/*` の JSON API と、それ以外のパスに対する静的ファイル配信を提供します。

mod error;
mod extract;
mod handler;
mod server;
mod signal;
pub mod state;

pub use error::ApiError;
pub use server::{Server, build_router};
