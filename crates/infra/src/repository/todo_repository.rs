//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **一覧は owner で絞り込む**: `find_all_by_owner` の WHERE 句で
//!   owner 条件を必ず指定する。呼び出し側でのフィルタ漏れによる
//!   他ユーザーの Todo 混入を構造的に防ぐ
//! - **単一取得は絞り込まない**: `find_by_id` に owner 条件はない。
//!   単一操作のアクセス判定はポリシー層の責務
//! - **書き込みは単文**: `update` / `delete` は WHERE id 付きの
//!   単一 SQL 文。行が消えていれば `false` が返り、半端な状態の
//!   行を観測することはない
//! - **owner_id は更新しない**: UPDATE 文の SET 句に owner_id を
//!   含めない（作成後不変の不変条件を SQL レベルでも保証）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tasklane_domain::{
    todo::{Todo, TodoDraft, TodoId, TodoTitle},
    user::UserId,
};
use uuid::Uuid;

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo の CRUD 操作を定義する。「行が見つからない」は期待される結果
/// であり、`Option` / `bool` で表現する（エラーにはしない）。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 指定 owner の全 Todo を id 順で取得する
    async fn find_all_by_owner(&self, owner_id: UserId) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する（owner による絞り込みなし）
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を挿入し、採番された id を持つエンティティを返す
    ///
    /// id の採番は原子的であり、並行する挿入が同じ id を受け取ることはない。
    async fn insert(&self, draft: &TodoDraft) -> Result<Todo, InfraError>;

    /// タイトル・完了フラグ・更新日時を反映する
    ///
    /// 行が存在しない場合は `false` を返す。owner_id は変更しない。
    async fn update(&self, todo: &Todo) -> Result<bool, InfraError>;

    /// Todo を削除する
    ///
    /// 行が存在しない場合は `false` を返す（2 回目の削除は `false`）。
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError>;
}

/// todos テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:          i64,
    title:       String,
    is_complete: bool,
    owner_id:    Uuid,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl TodoRow {
    /// 行をエンティティに復元する
    ///
    /// CHECK 制約と挿入経路のバリデーションにより title は通常有効だが、
    /// 制約の外で書き込まれた行に備え、不正な値は panic ではなく
    /// [`InfraError::Unexpected`] として返す。
    fn into_todo(self) -> Result<Todo, InfraError> {
        let title = TodoTitle::new(self.title).map_err(|e| {
            InfraError::Unexpected(format!("todos.id={} のタイトルが不正です: {e}", self.id))
        })?;
        Ok(Todo::from_db(
            TodoId::from_i64(self.id),
            title,
            self.is_complete,
            UserId::from_uuid(self.owner_id),
            self.created_at,
            self.updated_at,
        ))
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%owner_id))]
    async fn find_all_by_owner(&self, owner_id: UserId) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, is_complete, owner_id, created_at, updated_at
            FROM todos
            WHERE owner_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, is_complete, owner_id, created_at, updated_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TodoRow::into_todo).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, draft: &TodoDraft) -> Result<Todo, InfraError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO todos (title, is_complete, owner_id, created_at, updated_at)
            VALUES ($1, FALSE, $2, $3, $3)
            RETURNING id
            "#,
        )
        .bind(draft.title().as_str())
        .bind(draft.owner_id().as_uuid())
        .bind(draft.created_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(draft.clone().into_todo(TodoId::from_i64(id)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, todo: &Todo) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $2, is_complete = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(todo.id().as_i64())
        .bind(todo.title().as_str())
        .bind(todo.is_complete())
        .bind(todo.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
