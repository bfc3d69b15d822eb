//! JSON ファイルを使った `PagePasswordSource` 実装
//!
//! ファイル形式は `{"<page>": "<password>", ...}` のオブジェクトです。
//! 照合のたびに読み直すので、サーバーを再起動せずにパスワードを編集できます。

use std::{collections::HashMap, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use crate::domain::{PagePasswordSource, PagePasswords, RepositoryError};

pub struct JsonFilePagePasswordSource {
    path: PathBuf,
}

impl JsonFilePagePasswordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PagePasswordSource for JsonFilePagePasswordSource {
    async fn load_passwords(&self) -> Result<PagePasswords, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            // ファイルがなければどのページにもパスワードは設定されていない
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Page password file {} not found", self.path.display());
                return Ok(PagePasswords::default());
            }
            Err(e) => {
                return Err(RepositoryError::PasswordSourceUnavailable(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let passwords: HashMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::PasswordSourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let passwords = PagePasswords::new(passwords);
        if passwords.is_empty() {
            tracing::debug!("Page password file {} is empty", self.path.display());
        }
        Ok(passwords)
    }
}
