//! # ユースケース層
//!
//! ハンドラから呼び出されるアプリケーションロジックを提供する。

pub mod todo;

pub use todo::{TodoUseCase, UpdateTodoInput};
