//! ページごとのパスワード照合

use std::collections::HashMap;

use super::PageName;

/// パスワード照合の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// 一致した。`url` はページ本体のパス
    Authorized { url: String },
    /// 不一致
    Unauthorized,
    /// ページにパスワードが設定されていない
    NotConfigured,
}

/// ページ名から期待されるパスワードへの対応表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePasswords {
    passwords: HashMap<String, String>,
}

impl PagePasswords {
    pub fn new(passwords: HashMap<String, String>) -> Self {
        Self { passwords }
    }

    /// 平文のまま大文字小文字を区別して完全一致で比較する
    pub fn check(&self, page: &PageName, candidate: &str) -> UnlockOutcome {
        match self.passwords.get(page.as_str()) {
            None => UnlockOutcome::NotConfigured,
            Some(expected) if expected == candidate => UnlockOutcome::Authorized {
                url: page.content_path(),
            },
            Some(_) => UnlockOutcome::Unauthorized,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}
