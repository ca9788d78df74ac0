//! # API ハンドラ
//!
//! HTTP リクエストを受け取り、ユースケースを呼び出し、
//! レスポンスに変換する層。

pub mod health;
pub mod todo;

pub use health::health_check;
pub use todo::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo};
