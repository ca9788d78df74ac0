//! # Todo API ハンドラ
//!
//! Todo の CRUD エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 操作 |
//! |---------|------|------|
//! | GET | `/todos` | 自分の Todo 一覧 |
//! | GET | `/todos/{id}` | 1 件取得 |
//! | POST | `/todos` | 作成（201 + Location） |
//! | PUT | `/todos/{id}` | 更新 |
//! | DELETE | `/todos/{id}` | 削除 |
//!
//! レスポンスの Todo は `{ id, title, isComplete }` のみ。
//! `ownerId` はサーバー内部の情報であり、ペイロードに含めない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tasklane_domain::todo::{Todo, TodoId};
use tasklane_shared::ApiResponse;

use crate::{
    auth::CurrentUser,
    error::ApiError,
    usecase::{TodoUseCase, UpdateTodoInput},
};

/// Todo ハンドラの共有状態
pub struct TodoState {
    pub usecase: TodoUseCase,
}

/// Todo DTO
///
/// owner_id は公開しない。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    pub id:          i64,
    pub title:       String,
    pub is_complete: bool,
}

impl TodoDto {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            id:          todo.id().as_i64(),
            title:       todo.title().as_str().to_string(),
            is_complete: todo.is_complete(),
        }
    }
}

/// Todo 作成リクエスト
///
/// owner を指定するフィールドは存在しない（リクエスト元に固定される）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
}

/// Todo 更新リクエスト
///
/// `id` はパスの id と一致する必要がある。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub id:          i64,
    pub title:       String,
    pub is_complete: bool,
}

/// 自分の Todo 一覧を取得する
///
/// ## エンドポイント
/// GET /todos
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
    current_user: CurrentUser,
) -> Result<Response, ApiError> {
    let todos = state.usecase.list_todos(current_user.requester()).await?;

    let response = ApiResponse::new(todos.iter().map(TodoDto::from_todo).collect::<Vec<_>>());

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Todo を 1 件取得する
///
/// ## エンドポイント
/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let todo = state
        .usecase
        .get_todo(current_user.requester(), TodoId::from_i64(id))
        .await?;

    let response = ApiResponse::new(TodoDto::from_todo(&todo));

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Todo を作成する
///
/// ## エンドポイント
/// POST /todos
///
/// 201 Created と、作成された Todo への Location ヘッダを返す。
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    current_user: CurrentUser,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<Response, ApiError> {
    let todo = state
        .usecase
        .create_todo(current_user.requester(), payload.title)
        .await?;

    let location = format!("/todos/{}", todo.id());
    let response = ApiResponse::new(TodoDto::from_todo(&todo));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    )
        .into_response())
}

/// Todo を更新する
///
/// ## エンドポイント
/// PUT /todos/{id}
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Response, ApiError> {
    let input = UpdateTodoInput {
        id:          TodoId::from_i64(payload.id),
        title:       payload.title,
        is_complete: payload.is_complete,
    };

    let todo = state
        .usecase
        .update_todo(current_user.requester(), TodoId::from_i64(id), input)
        .await?;

    let response = ApiResponse::new(TodoDto::from_todo(&todo));

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Todo を削除する
///
/// ## エンドポイント
/// DELETE /todos/{id}
///
/// 他のエンドポイントと同じく `{ "data": .. }` エンベロープを返す
/// （返すべき実体がないため `data` は null）。
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    state
        .usecase
        .delete_todo(current_user.requester(), TodoId::from_i64(id))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(()))).into_response())
}
