//! # API エラー定義
//!
//! API 層のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## ステータスコードの方針
//!
//! | エラー | ステータス |
//! |--------|-----------|
//! | `NotFound` | 404 |
//! | `BadRequest` | 400 |
//! | `Unauthorized` | 401 |
//! | `Database` | 500（詳細はログのみ、レスポンスには出さない） |
//!
//! 403 Forbidden は存在しない。他ユーザーの Todo への操作は
//! 「見つからない」と同じ 404 で返し、id の存在自体を秘匿する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tasklane_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない（アクセス権がない場合もこれに含める）
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 認証情報がない、または不正
    #[error("認証されていません: {0}")]
    Unauthorized(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] tasklane_infra::InfraError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::unauthorized(msg))
            }
            ApiError::Database(e) => {
                tracing::error!("データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error("内部エラーが発生しました"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_foundは404になる() {
        let response = ApiError::NotFound("todo".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_requestは400になる() {
        let response = ApiError::BadRequest("id".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorizedは401になる() {
        let response = ApiError::Unauthorized("header".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_databaseエラーは500になる() {
        let infra_err = tasklane_infra::InfraError::Unexpected("接続断".to_string());
        let response = ApiError::Database(infra_err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
