//! # Todo ユースケース
//!
//! Todo の CRUD 操作を実装する。操作の順序規則はここで保証する:
//!
//! 1. 更新時の id 一致検査はストアに触れる前に行う（不一致は BadRequest）
//! 2. 単一操作はレコードをロードし、ポリシー判定してから書き込む
//! 3. 「存在しない」と「権限がない」はどちらも同じ NotFound として返す
//!
//! リトライは行わない。各操作は 1 回限りの試行。

use std::sync::Arc;

use tasklane_domain::{
    clock::Clock,
    policy,
    requester::Requester,
    todo::{Todo, TodoDraft, TodoId, TodoTitle},
};
use tasklane_infra::repository::TodoRepository;

use crate::error::ApiError;

/// NotFound の統一メッセージ
///
/// 存在しない場合と権限がない場合で文言を変えない（存在秘匿）。
const TODO_NOT_FOUND: &str = "todo が見つかりません";

/// Todo 更新の入力
pub struct UpdateTodoInput {
    /// ペイロード内の id（パスの id と一致する必要がある）
    pub id:          TodoId,
    pub title:       String,
    pub is_complete: bool,
}

/// Todo ユースケース
pub struct TodoUseCase {
    todo_repository: Arc<dyn TodoRepository>,
    clock: Arc<dyn Clock>,
}

impl TodoUseCase {
    pub fn new(todo_repository: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            todo_repository,
            clock,
        }
    }

    /// リクエスト元ユーザー自身の Todo 一覧を取得する
    ///
    /// 絞り込みはストアの責務。管理者にもオーバーライドはなく、
    /// 一覧には常に自分の Todo だけが含まれる。
    pub async fn list_todos(&self, requester: &Requester) -> Result<Vec<Todo>, ApiError> {
        let todos = self
            .todo_repository
            .find_all_by_owner(requester.id())
            .await?;
        Ok(todos)
    }

    /// Todo を 1 件取得する
    ///
    /// owner または管理者のみ。それ以外には存在有無を問わず NotFound。
    pub async fn get_todo(&self, requester: &Requester, id: TodoId) -> Result<Todo, ApiError> {
        let todo = self.todo_repository.find_by_id(id).await?;

        match todo {
            Some(todo) if policy::can_view(requester, &todo) => Ok(todo),
            _ => Err(ApiError::NotFound(TODO_NOT_FOUND.to_string())),
        }
    }

    /// Todo を作成する
    ///
    /// owner はリクエスト元ユーザーに固定される。
    /// 認可判定はない（認証済みであれば誰でも作成できる）。
    pub async fn create_todo(
        &self,
        requester: &Requester,
        title: String,
    ) -> Result<Todo, ApiError> {
        let title = TodoTitle::new(title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let draft = TodoDraft::new(title, requester.id(), self.clock.now());

        let todo = self.todo_repository.insert(&draft).await?;
        Ok(todo)
    }

    /// Todo を更新する（タイトル・完了フラグのみ）
    ///
    /// ペイロードの id がパスの id と一致しない場合、ストアに触れる前に
    /// BadRequest で打ち切る。owner の変更は入力に表現できない。
    pub async fn update_todo(
        &self,
        requester: &Requester,
        path_id: TodoId,
        input: UpdateTodoInput,
    ) -> Result<Todo, ApiError> {
        if input.id != path_id {
            return Err(ApiError::BadRequest(
                "パスとペイロードの id が一致しません".to_string(),
            ));
        }

        let title = TodoTitle::new(input.title).map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let todo = self.todo_repository.find_by_id(path_id).await?;
        let todo = match todo {
            Some(todo) if policy::can_update(requester, &todo) => todo,
            _ => return Err(ApiError::NotFound(TODO_NOT_FOUND.to_string())),
        };

        let updated = todo.apply_update(title, input.is_complete, self.clock.now());

        // ロード後に並行削除された場合は false が返る
        if !self.todo_repository.update(&updated).await? {
            return Err(ApiError::NotFound(TODO_NOT_FOUND.to_string()));
        }

        Ok(updated)
    }

    /// Todo を削除する
    ///
    /// 2 回目の削除は NotFound（冪等な失敗）。
    pub async fn delete_todo(&self, requester: &Requester, id: TodoId) -> Result<(), ApiError> {
        let todo = self.todo_repository.find_by_id(id).await?;
        match todo {
            Some(todo) if policy::can_delete(requester, &todo) => {}
            _ => return Err(ApiError::NotFound(TODO_NOT_FOUND.to_string())),
        }

        if !self.todo_repository.delete(id).await? {
            return Err(ApiError::NotFound(TODO_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
