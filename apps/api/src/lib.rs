//! # Tasklane API サーバー
//!
//! ユーザー単位の Todo を管理する HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! handler → usecase → (policy / repository)
//! ```
//!
//! - **handler**: リクエストの受け取りとレスポンス変換
//! - **usecase**: 操作の順序規則とポリシー適用
//! - **policy**（domain）: アクセス可否の純粋判定
//! - **repository**（infra）: 永続化
//!
//! ルーター構築を [`build_router`] として公開し、
//! テストからモックリポジトリでアプリ全体を駆動できるようにする。

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use handler::{TodoState, create_todo, delete_todo, get_todo, health_check, list_todos, update_todo};
use tower_http::trace::TraceLayer;

/// アプリケーションのルーターを構築する
pub fn build_router(todo_state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(todo_state)
        .layer(TraceLayer::new_for_http())
}
