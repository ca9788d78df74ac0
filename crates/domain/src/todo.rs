//! # Todo
//!
//! ユーザー単位のタスクを表現するドメインモデル。
//!
//! ## ライフサイクル
//!
//! ```text
//! Created → (Updated)* → Deleted
//! ```
//!
//! `is_complete` はフラグであって状態機械のフェーズではない。
//! 完了済みの Todo も他と同様に更新・削除できる。
//!
//! ## 不変条件
//!
//! - `owner_id` は作成時に確定し、以後変更されない
//!   （エンティティは owner の変更手段を公開しない）
//! - `title` は trim 後に空でない
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tasklane_domain::{
//!     todo::{Todo, TodoDraft, TodoId, TodoTitle},
//!     user::UserId,
//! };
//!
//! let title = TodoTitle::new("牛乳を買う")?;
//! let draft = TodoDraft::new(title, UserId::new(), chrono::Utc::now());
//!
//! // id はストアが採番するため、エンティティはドラフトから復元される
//! let todo = draft.into_todo(TodoId::from_i64(1));
//! assert!(!todo.is_complete());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, user::UserId};

// =========================================================================
// TodoId（Todo 識別子）
// =========================================================================

/// Todo の一意識別子
///
/// ストアが採番する単調増加の整数（PostgreSQL の `BIGSERIAL`）。
/// Newtype パターンで `UserId` 等との取り違えを防ぐ。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の整数値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// Todo のタイトル（値オブジェクト）
///
/// # 不変条件
///
/// - trim 後に空文字列ではない（文字数の上限は設けない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "タイトルを入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// TodoDraft（挿入前の Todo）
// =========================================================================

/// 挿入前の Todo
///
/// id はストアが採番するため、挿入前のエンティティは id を持たない。
/// `owner_id` はリクエスト元ユーザーから構築時に確定する
/// （呼び出し側の入力から owner を受け取る経路は存在しない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    title:      TodoTitle,
    owner_id:   UserId,
    created_at: DateTime<Utc>,
}

impl TodoDraft {
    /// 新しいドラフトを作成する
    pub fn new(title: TodoTitle, owner_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            title,
            owner_id,
            created_at: now,
        }
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// ストアが採番した id と組み合わせてエンティティを復元する
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            is_complete: false,
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// Todo エンティティ
///
/// # 不変条件
///
/// - `owner_id` は作成時に確定し、不変（変更メソッドを公開しない）
/// - 新規作成時の `is_complete` は常に `false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    title:       TodoTitle,
    is_complete: bool,
    owner_id:    UserId,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl Todo {
    /// DB から取得した値でエンティティを復元する
    ///
    /// バリデーションは行わない（DB に格納された値は制約により常に有効）。
    pub fn from_db(
        id: TodoId,
        title: TodoTitle,
        is_complete: bool,
        owner_id: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            is_complete,
            owner_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// タイトルと完了フラグを更新した状態を返す
    ///
    /// `owner_id` と `created_at` は引き継がれる。
    pub fn apply_update(self, title: TodoTitle, is_complete: bool, now: DateTime<Utc>) -> Self {
        Self {
            title,
            is_complete,
            updated_at: now,
            ..self
        }
    }
}
