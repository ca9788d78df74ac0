//! # Tasklane API サーバー起動
//!
//! ユーザー単位の Todo を管理する HTTP API サーバー。
//!
//! ## 信頼境界
//!
//! この API は認証プロキシの背後で動作する。プロキシがトークンを
//! 検証し、`x-user-id` / `x-user-is-admin` ヘッダでユーザー情報を
//! 引き渡す。直接インターネットに公開してはならない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! API_PORT=3000 DATABASE_URL=postgres://... cargo run -p tasklane-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use tasklane_api::{build_router, config::ApiConfig, handler::TodoState, usecase::TodoUseCase};
use tasklane_domain::clock::SystemClock;
use tasklane_infra::{db, repository::PostgresTodoRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tasklane=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    tracing::info!("データベースに接続しました");

    // マイグレーション適用
    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗しました");

    // 依存コンポーネントを初期化
    let todo_repository = PostgresTodoRepository::new(pool);
    let usecase = TodoUseCase::new(Arc::new(todo_repository), Arc::new(SystemClock));
    let todo_state = Arc::new(TodoState { usecase });

    // ルーター構築
    let app = build_router(todo_state);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
