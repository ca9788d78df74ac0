//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! tasklane-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tasklane_domain::{
    todo::{Todo, TodoDraft, TodoId},
    user::UserId,
};

use crate::{error::InfraError, repository::TodoRepository};

/// インメモリ実装の TodoRepository
///
/// id の採番は `AtomicI64` で行い、並行する `insert` でも
/// 重複しない（PostgreSQL の BIGSERIAL と同じ性質）。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    todos:   Arc<Mutex<Vec<Todo>>>,
    next_id: Arc<AtomicI64>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self {
            todos:   Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(0)),
        }
    }

    /// 採番済みの Todo を直接投入する（テストのセットアップ用）
    pub fn add_todo(&self, todo: Todo) {
        self.todos.lock().unwrap().push(todo);
    }

    /// 現在格納されている全 Todo のスナップショットを返す
    pub fn all(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all_by_owner(&self, owner_id: UserId) -> Result<Vec<Todo>, InfraError> {
        let mut todos: Vec<Todo> = self
            .todos
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.owner_id() == owner_id)
            .cloned()
            .collect();
        todos.sort_by_key(Todo::id);
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn insert(&self, draft: &TodoDraft) -> Result<Todo, InfraError> {
        let id = TodoId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let todo = draft.clone().into_todo(id);
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<bool, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        match todos.iter().position(|t| t.id() == todo.id()) {
            Some(pos) => {
                todos[pos] = todo.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        match todos.iter().position(|t| t.id() == id) {
            Some(pos) => {
                todos.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
