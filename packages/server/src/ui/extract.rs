//! `ApiError` で拒否する axum エクストラクタ
//!
//! axum 標準の `Query` / `Path` は失敗時に text/plain を返すため、
//! JSON の `{error}` に揃えるためのラッパーを使う。

use axum::extract::{FromRequestParts, Path, Query};

use super::error::ApiError;

/// クエリ文字列（失敗時は 400 `{error}`）
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// パスパラメータ（失敗時は 400 `{error}`）
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
