//! # ユーザー識別子
//!
//! ユーザーは外部の認証基盤が管理するエンティティであり、
//! このシステムは識別子（[`UserId`]）でのみ参照する。
//! ユーザーの作成・更新・削除はこのシステムの責務ではない。

define_uuid_id! {
    /// ユーザーの一意識別子
    ///
    /// Todo の `owner_id` と、リクエスト元ユーザーの識別に使用する。
    pub struct UserId;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_uuidとas_uuidで往復できる() {
        let id = UserId::new();
        let restored = UserId::from_uuid(*id.as_uuid());

        assert_eq!(id, restored);
    }

    #[test]
    fn test_newは毎回異なるidを生成する() {
        assert_ne!(UserId::new(), UserId::new());
    }
}
