//! # アプリケーション構築
//!
//! ルーター構築とレイヤー構成を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handler::{health_check, register},
    middleware::permissive_cors,
};

/// ルーターを構築する
///
/// レイヤー順序（下に書いたものが外側）:
///
/// 1. `permissive_cors`: 全レスポンスに CORS ヘッダーを付与し、
///    `OPTIONS` をルーティング前に短絡応答する
/// 2. `TraceLayer`（最外）: リクエスト単位のスパンとアクセスログ
pub fn build_app() -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/health", get(health_check))
        .layer(from_fn(permissive_cors))
        .layer(TraceLayer::new_for_http())
}
