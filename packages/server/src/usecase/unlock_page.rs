//! UseCase: パスワード付きページの解錠
//!
//! パスワードの対応表は照合のたびに `PagePasswordSource` から読み直す。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UnlockPageUseCase::execute() メソッド（`PagePasswordSource` は mockall のモック）
//!
//! ### どのような状況を想定しているか
//! - 正常系：一致したらページの URL を返す
//! - 異常系：不一致、未設定のページ、ページ名なし、読み込み失敗
//! - 呼び出しごとに読み込みが行われること

use std::sync::Arc;

use crate::domain::{PageName, PagePasswordSource, UnlockOutcome};

use super::error::UnlockPageError;

/// ページ解錠のユースケース
pub struct UnlockPageUseCase {
    source: Arc<dyn PagePasswordSource>,
}

impl UnlockPageUseCase {
    /// 新しい UnlockPageUseCase を作成
    pub fn new(source: Arc<dyn PagePasswordSource>) -> Self {
        Self { source }
    }

    /// 解錠を実行
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 解錠したページの URL（`/{page}.html`）
    /// * `Err(UnlockPageError)` - ページ名なし、未設定、不一致、読み込み失敗
    pub async fn execute(
        &self,
        page: Option<String>,
        password: Option<String>,
    ) -> Result<String, UnlockPageError> {
        let page = page
            .and_then(|page| PageName::new(page).ok())
            .ok_or(UnlockPageError::MissingPage)?;

        let passwords = self
            .source
            .load_passwords()
            .await
            .map_err(|e| UnlockPageError::SourceUnavailable(e.to_string()))?;

        match passwords.check(&page, password.as_deref().unwrap_or_default()) {
            UnlockOutcome::Authorized { url } => {
                tracing::info!("Page '{}' unlocked", page.as_str());
                Ok(url)
            }
            UnlockOutcome::Unauthorized => {
                tracing::warn!("Wrong password for page '{}'", page.as_str());
                Err(UnlockPageError::WrongPassword)
            }
            UnlockOutcome::NotConfigured => Err(UnlockPageError::NotConfigured(
                page.as_str().to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockPagePasswordSource, PagePasswords, RepositoryError};
    use std::collections::HashMap;

    fn passwords() -> PagePasswords {
        PagePasswords::new(HashMap::from([
            ("blog2".to_string(), "Purr".to_string()),
            ("blog3".to_string(), "Meow".to_string()),
        ]))
    }

    fn usecase_with(times: usize) -> UnlockPageUseCase {
        let mut source = MockPagePasswordSource::new();
        source
            .expect_load_passwords()
            .times(times)
            .returning(|| Ok(passwords()));
        UnlockPageUseCase::new(Arc::new(source))
    }

    #[tokio::test]
    async fn test_correct_password_returns_page_url() {
        // テスト項目: 正しいパスワードで /{page}.html が返る
        // given (前提条件):
        let usecase = usecase_with(1);

        // when (操作):
        let result = usecase
            .execute(Some("blog2".to_string()), Some("Purr".to_string()))
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok("/blog2.html".to_string()));
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        // テスト項目: 誤ったパスワード・パスワードなしは WrongPassword になる
        // given (前提条件):
        let usecase = usecase_with(2);

        // when (操作):
        let wrong = usecase
            .execute(Some("blog2".to_string()), Some("purr".to_string()))
            .await;
        let missing = usecase.execute(Some("blog2".to_string()), None).await;

        // then (期待する結果):
        assert_eq!(wrong, Err(UnlockPageError::WrongPassword));
        assert_eq!(missing, Err(UnlockPageError::WrongPassword));
    }

    #[tokio::test]
    async fn test_unconfigured_page() {
        // テスト項目: パスワードが設定されていないページは NotConfigured になる
        // given (前提条件):
        let usecase = usecase_with(1);

        // when (操作):
        let result = usecase
            .execute(Some("secret".to_string()), Some("Purr".to_string()))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UnlockPageError::NotConfigured("secret".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_page_does_not_load_passwords() {
        // テスト項目: ページ名がなければ読み込みを行わずに MissingPage になる
        // given (前提条件):
        let usecase = usecase_with(0);

        // when (操作):
        let absent = usecase.execute(None, Some("Purr".to_string())).await;
        let blank = usecase
            .execute(Some("  ".to_string()), Some("Purr".to_string()))
            .await;

        // then (期待する結果):
        assert_eq!(absent, Err(UnlockPageError::MissingPage));
        assert_eq!(blank, Err(UnlockPageError::MissingPage));
    }

    #[tokio::test]
    async fn test_passwords_are_reloaded_on_every_check() {
        // テスト項目: 照合のたびに読み直すので、途中で変わったパスワードが反映される
        // given (前提条件):
        let mut source = MockPagePasswordSource::new();
        let mut sequence = mockall::Sequence::new();
        source
            .expect_load_passwords()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|| Ok(passwords()));
        source
            .expect_load_passwords()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|| {
                Ok(PagePasswords::new(HashMap::from([(
                    "blog2".to_string(),
                    "Changed".to_string(),
                )])))
            });
        let usecase = UnlockPageUseCase::new(Arc::new(source));

        // when (操作):
        let first = usecase
            .execute(Some("blog2".to_string()), Some("Purr".to_string()))
            .await;
        let second = usecase
            .execute(Some("blog2".to_string()), Some("Purr".to_string()))
            .await;

        // then (期待する結果):
        assert!(first.is_ok());
        assert_eq!(second, Err(UnlockPageError::WrongPassword));
    }

    #[tokio::test]
    async fn test_source_failure_is_reported() {
        // テスト項目: 読み込みに失敗した場合は SourceUnavailable になる
        // given (前提条件):
        let mut source = MockPagePasswordSource::new();
        source.expect_load_passwords().returning(|| {
            Err(RepositoryError::PasswordSourceUnavailable(
                "broken".to_string(),
            ))
        });
        let usecase = UnlockPageUseCase::new(Arc::new(source));

        // when (操作):
        let result = usecase
            .execute(Some("blog2".to_string()), Some("Purr".to_string()))
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(UnlockPageError::SourceUnavailable(_))));
    }
}
