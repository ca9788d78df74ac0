//! # Tasklane ドメイン層
//!
//! ビジネスロジックの中核を担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`todo::TodoTitle`],
//!   [`user::UserId`]）
//! - **ポリシー**: エンティティに属さない純粋なアクセス判定ロジック（[`policy`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダの抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`policy`] - Todo へのアクセス判定
//! - [`requester`] - リクエスト単位の認証済みユーザー情報
//! - [`todo`] - Todo エンティティと値オブジェクト
//! - [`user`] - 外部で管理されるユーザーの識別子

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod policy;
pub mod requester;
pub mod todo;
pub mod user;

pub use error::DomainError;
