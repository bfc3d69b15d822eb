//! Infrastructure 層
//!
//! ドメイン層の trait の具体的な実装と、HTTP 用の DTO を提供します。

pub mod dto;
pub mod page_lock;
pub mod repository;
pub mod site_config;
