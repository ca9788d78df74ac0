//! # リクエスト元ユーザー
//!
//! リクエスト単位の認証済みユーザー情報を表現する値オブジェクト。
//!
//! ## 設計方針
//!
//! 認証そのものは上流（認証プロキシ）の責務であり、この型は
//! 「認証は済んでいるが信頼はしない入力」として扱う。
//! グローバルな実行時状態ではなく、ユースケースの全操作に
//! 明示的な引数として渡す。

use crate::user::UserId;

/// 現在のリクエストを発行した認証済みユーザー
///
/// `id` と管理者フラグのみを持つ。ユーザーの属性情報（名前、メール等）は
/// このシステムの関心外。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    id:       UserId,
    is_admin: bool,
}

impl Requester {
    /// 新しいリクエスト元ユーザーを作成する
    pub fn new(id: UserId, is_admin: bool) -> Self {
        Self { id, is_admin }
    }

    /// ユーザー ID を取得する
    pub fn id(&self) -> UserId {
        self.id
    }

    /// 管理者かどうかを返す
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
