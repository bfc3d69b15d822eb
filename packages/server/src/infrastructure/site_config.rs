//! サイト設定ファイルの読み込み

use std::path::Path;

use thiserror::Error;

use crate::domain::SiteConfig;

#[derive(Debug, Error)]
pub enum SiteConfigError {
    #[error("Failed to read site config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid site config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// JSON ファイルからサイト設定を読み込む。`path` が `None` なら組み込みの設定を返す。
pub fn load_site_config(path: Option<&Path>) -> Result<SiteConfig, SiteConfigError> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };

    let raw = std::fs::read_to_string(path).map_err(|source| SiteConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SiteConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
