//! # リクエスト元ユーザーの解決
//!
//! 認証済みユーザーをリクエストヘッダから解決する axum extractor。
//!
//! ## 信頼境界
//!
//! この API は認証プロキシの背後で動作する。プロキシがトークンを検証し、
//! 検証済みのユーザー情報をヘッダで引き渡す:
//!
//! | ヘッダ | 必須 | 内容 |
//! |--------|------|------|
//! | `x-user-id` | Yes | ユーザー ID（UUID） |
//! | `x-user-is-admin` | No | `"true"` / `"false"`（省略時 `false`） |
//!
//! ヘッダが欠落・不正な場合は 401 Unauthorized を返す。
//! トークンの発行・検証そのものはこのサービスの責務ではない。

use axum::{extract::FromRequestParts, http::request::Parts};
use tasklane_domain::{requester::Requester, user::UserId};
use uuid::Uuid;

use crate::error::ApiError;

/// ユーザー ID ヘッダ名
const USER_ID_HEADER: &str = "x-user-id";

/// 管理者フラグヘッダ名
const IS_ADMIN_HEADER: &str = "x-user-is-admin";

/// 認証済みのリクエスト元ユーザー
///
/// ハンドラの引数に取ることで、認証されていないリクエストを
/// ハンドラ本体に到達させない。
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(Requester);

impl CurrentUser {
    /// ドメイン層に渡す [`Requester`] を取得する
    pub fn requester(&self) -> &Requester {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| {
                ApiError::Unauthorized("認証情報がありません".to_string())
            })?
            .to_str()
            .ok()
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or_else(|| ApiError::Unauthorized("認証情報が不正です".to_string()))?;

        let is_admin = match parts.headers.get(IS_ADMIN_HEADER) {
            None => false,
            Some(value) => match value.to_str().ok() {
                Some("true") => true,
                Some("false") => false,
                _ => {
                    return Err(ApiError::Unauthorized("認証情報が不正です".to_string()));
                }
            },
        };

        Ok(Self(Requester::new(UserId::from_uuid(user_id), is_admin)))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;
    use rstest::rstest;

    use super::*;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/todos");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn test_ヘッダからユーザーを解決する() {
        let id = Uuid::now_v7();
        let mut parts = parts_with_headers(&[("x-user-id", &id.to_string())]);

        let user = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(*user.requester().id().as_uuid(), id);
        assert!(!user.requester().is_admin());
    }

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    #[tokio::test]
    async fn test_管理者フラグを解決する(#[case] value: &str, #[case] expected: bool) {
        let id = Uuid::now_v7();
        let mut parts = parts_with_headers(&[
            ("x-user-id", id.to_string().as_str()),
            ("x-user-is-admin", value),
        ]);

        let user = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(user.requester().is_admin(), expected);
    }

    #[tokio::test]
    async fn test_ユーザーidヘッダがないと401() {
        let mut parts = parts_with_headers(&[]);

        let result = CurrentUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_ユーザーidがuuidでないと401() {
        let mut parts = parts_with_headers(&[("x-user-id", "alice")]);

        let result = CurrentUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[rstest]
    #[case("yes")]
    #[case("1")]
    #[case("TRUE")]
    #[tokio::test]
    async fn test_管理者フラグが不正だと401(#[case] value: &str) {
        let id = Uuid::now_v7();
        let mut parts = parts_with_headers(&[
            ("x-user-id", id.to_string().as_str()),
            ("x-user-is-admin", value),
        ]);

        let result = CurrentUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
