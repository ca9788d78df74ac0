//! # Todo アクセスポリシー
//!
//! 単一 Todo への操作可否を判定する純粋関数群。
//!
//! ## 判定規則
//!
//! | 操作 | 許可条件 |
//! |------|---------|
//! | 単一取得 | owner または管理者 |
//! | 更新 | owner または管理者 |
//! | 削除 | owner または管理者 |
//! | 作成 | 認証済みであれば誰でも（owner はリクエスト元に固定） |
//! | 一覧 | 判定なし（ストアが owner で絞り込む。管理者も自分の分のみ） |
//!
//! 一覧に管理者オーバーライドはない。単一操作とは非対称だが、
//! これは意図したふるまいであり、テストで固定している。
//!
//! ## 拒否の表現
//!
//! 拒否は api 層で 404 Not Found として返す（403 は使わない）。
//! 他ユーザーの Todo の id が存在するかどうかを漏らさないための
//! 存在秘匿パターン。この判定関数自体は bool を返すのみで、
//! エラー表現には関与しない。

use crate::{requester::Requester, todo::Todo};

/// リクエスト元が Todo の owner または管理者であるか
fn is_owner_or_admin(requester: &Requester, todo: &Todo) -> bool {
    requester.id() == todo.owner_id() || requester.is_admin()
}

/// 単一取得を許可するか
pub fn can_view(requester: &Requester, todo: &Todo) -> bool {
    is_owner_or_admin(requester, todo)
}

/// 更新を許可するか
///
/// パスとペイロードの id 一致は前提条件としてユースケース層が
/// ストアに触れる前に検査する（不一致は認可拒否ではなく BadRequest）。
pub fn can_update(requester: &Requester, todo: &Todo) -> bool {
    is_owner_or_admin(requester, todo)
}

/// 削除を許可するか
pub fn can_delete(requester: &Requester, todo: &Todo) -> bool {
    is_owner_or_admin(requester, todo)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use rstest::rstest;

    use super::*;
    use crate::{
        todo::{TodoDraft, TodoId, TodoTitle},
        user::UserId,
    };

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn todo_owned_by(owner: UserId) -> Todo {
        TodoDraft::new(TodoTitle::new("牛乳を買う").unwrap(), owner, fixed_now())
            .into_todo(TodoId::from_i64(1))
    }

    /// 真理値表: 許可 ⇔ (owner 一致 ∨ 管理者)
    #[rstest]
    #[case(true, false, true, "owner本人")]
    #[case(true, true, true, "owner かつ管理者")]
    #[case(false, true, true, "他人だが管理者")]
    #[case(false, false, false, "他人で一般ユーザー")]
    fn test_単一操作の判定は所有か管理者で決まる(
        #[case] is_owner: bool,
        #[case] is_admin: bool,
        #[case] expected: bool,
        #[case] _description: &str,
    ) {
        let owner = UserId::new();
        let todo = todo_owned_by(owner);
        let requester_id = if is_owner { owner } else { UserId::new() };
        let requester = Requester::new(requester_id, is_admin);

        assert_eq!(can_view(&requester, &todo), expected);
        assert_eq!(can_update(&requester, &todo), expected);
        assert_eq!(can_delete(&requester, &todo), expected);
    }

    #[test]
    fn test_3つの判定関数は同一の述語を共有する() {
        let owner = UserId::new();
        let todo = todo_owned_by(owner);
        let stranger = Requester::new(UserId::new(), false);

        assert_eq!(can_view(&stranger, &todo), can_update(&stranger, &todo));
        assert_eq!(can_update(&stranger, &todo), can_delete(&stranger, &todo));
    }
}
