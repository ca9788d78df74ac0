//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `sqlx::Error` を `#[from]` でラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **期待される不在は表現しない**: 「行が見つからない」は
//!   リポジトリが `Option` / `bool` で返し、エラーにはしない

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// データベースクエリの実行失敗など、予期しない障害のみを表現する。
/// api 層でこのエラーを受け取り、500 Internal Server Error に変換する。
#[derive(Debug, Error)]
pub enum InfraError {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラー、制約違反など。
    #[error("データベースエラー: {0}")]
    Database(#[from] sqlx::Error),

    /// 予期しないエラー
    ///
    /// 上記に分類できない予期しないエラー。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_errorから変換できる() {
        let err: InfraError = sqlx::Error::RowNotFound.into();

        assert!(matches!(err, InfraError::Database(_)));
    }

    #[test]
    fn test_database_variantはsourceを保持する() {
        use std::error::Error;

        let err: InfraError = sqlx::Error::RowNotFound.into();

        assert!(err.source().is_some());
    }

    #[test]
    fn test_unexpectedのdisplay表現() {
        let err = InfraError::Unexpected("接続断".to_string());

        assert_eq!(format!("{err}"), "予期しないエラー: 接続断");
    }
}
